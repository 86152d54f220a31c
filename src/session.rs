// ABOUTME: Per-session meal list owned by the caller and passed into the aggregator
// ABOUTME: Append-only food entries with an aggregate view against a food lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::food_database::FoodLookup;
use crate::intelligence::protein_quality::{aggregate, MealAggregate};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::FoodEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Food entries collected during one interactive session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSession {
    id: Uuid,
    entries: Vec<FoodEntry>,
}

impl Default for MealSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MealSession {
    /// Start an empty session
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            entries: Vec::new(),
        }
    }

    /// Session identifier, used to correlate log events and errors
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Append a food entry
    ///
    /// Unknown food names are accepted; they contribute nothing until the
    /// database knows them.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the amount is negative or not finite
    pub fn add_food(&mut self, entry: FoodEntry) -> AppResult<()> {
        if !entry.amount.is_finite() || entry.amount < 0.0 {
            return Err(AppError::out_of_range(format!(
                "Food amount must be a non-negative number, got {}",
                entry.amount
            ))
            .with_session_id(self.id)
            .with_resource_id(entry.name));
        }

        debug!(session_id = %self.id, food = %entry.name, amount = entry.amount, "Added food entry");
        self.entries.push(entry);
        Ok(())
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no food has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Totals for every entry resolvable in `lookup`
    pub fn aggregate<L>(&self, lookup: &L) -> MealAggregate
    where
        L: FoodLookup + ?Sized,
    {
        aggregate(&self.entries, lookup)
    }
}
