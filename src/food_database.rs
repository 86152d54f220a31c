// ABOUTME: Read-only food database mapping food names to per-100 g nutrient records
// ABOUTME: Loads a JSON snapshot from disk and exposes the FoodLookup trait used by the aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Database
//!
//! The database file is a JSON object keyed by food name:
//!
//! ```json
//! { "Chicken breast": { "protein": 31.0, "carbs": 0.0, "fats": 3.6, "calories": 165.0, "diaas": 108.0 } }
//! ```
//!
//! A missing file is not an error: the session simply runs with an empty
//! database and every lookup misses.

use crate::config::FoodDatabaseConfig;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::FoodRecord;
use std::collections::HashMap;
use std::fs;
use std::hash::BuildHasher;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Resolves a food name to its nutrient record
pub trait FoodLookup {
    /// Record for `name`, if known
    fn lookup(&self, name: &str) -> Option<&FoodRecord>;
}

impl<S: BuildHasher> FoodLookup for HashMap<String, FoodRecord, S> {
    fn lookup(&self, name: &str) -> Option<&FoodRecord> {
        self.get(name)
    }
}

/// Immutable snapshot of the food database
#[derive(Debug, Clone, Default)]
pub struct FoodDatabase {
    records: HashMap<String, FoodRecord>,
}

impl FoodDatabase {
    /// Empty database; every lookup misses
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from in-memory records
    pub fn from_records<I, K>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, FoodRecord)>,
        K: Into<String>,
    {
        Self {
            records: records
                .into_iter()
                .map(|(name, record)| (name.into(), record))
                .collect(),
        }
    }

    /// Parse the JSON database format
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the document is not a name-to-record object
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let records: HashMap<String, FoodRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Load the database from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read, or
    /// `SerializationError` if its content is malformed
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Food database not found, using empty database");
                return Ok(Self::empty());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read food database: {e}"
                ))
                .with_resource_id(path.display().to_string())
                .with_source(e));
            }
        };

        let database = Self::from_json_str(&json)
            .map_err(|e| e.with_resource_id(path.display().to_string()))?;
        info!(path = %path.display(), foods = database.len(), "Loaded food database");
        Ok(database)
    }

    /// Load the database configured for this process
    ///
    /// # Errors
    ///
    /// See [`Self::load`]
    pub fn from_config(config: &FoodDatabaseConfig) -> AppResult<Self> {
        config
            .path
            .as_deref()
            .map_or_else(|| Ok(Self::empty()), Self::load)
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the database has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Food names in alphabetical order, for selection widgets
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FoodLookup for FoodDatabase {
    fn lookup(&self, name: &str) -> Option<&FoodRecord> {
        self.records.get(name)
    }
}
