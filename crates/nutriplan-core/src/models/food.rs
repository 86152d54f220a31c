// ABOUTME: Food models consumed by the protein quality aggregator
// ABOUTME: FoodRecord nutrient profiles (per 100 g), FoodEntry rows, and their mass units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::NUTRIENT_REFERENCE_GRAMS;
use crate::units::ounces_to_grams;

/// Unit of a food amount
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    /// Grams
    #[default]
    Grams,
    /// Avoirdupois ounces
    Ounces,
}

/// Nutrient profile of a food, per 100 g
///
/// Field names match the food database file (`protein`, `carbs`, `fats`,
/// `calories`, `diaas`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    /// Protein (g per 100 g)
    pub protein: f64,
    /// Carbohydrates (g per 100 g)
    pub carbs: f64,
    /// Fats (g per 100 g)
    pub fats: f64,
    /// Energy (kcal per 100 g)
    pub calories: f64,
    /// Digestible Indispensable Amino Acid Score (0-100 %)
    pub diaas: f64,
}

/// One row of a meal: a food name and how much of it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Food name, used as the lookup key
    pub name: String,
    /// Amount in `unit`
    pub amount: f64,
    /// Unit of `amount`
    #[serde(default)]
    pub unit: MassUnit,
}

impl FoodEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, amount: f64, unit: MassUnit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
        }
    }

    /// Entry measured in grams
    pub fn grams(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, amount, MassUnit::Grams)
    }

    /// Entry measured in ounces
    pub fn ounces(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, amount, MassUnit::Ounces)
    }

    /// Amount normalized to grams
    #[must_use]
    pub fn amount_grams(&self) -> f64 {
        match self.unit {
            MassUnit::Grams => self.amount,
            MassUnit::Ounces => ounces_to_grams(self.amount),
        }
    }

    /// Scale factor applied to per-100 g nutrient values
    #[must_use]
    pub fn nutrient_multiplier(&self) -> f64 {
        self.amount_grams() / NUTRIENT_REFERENCE_GRAMS
    }
}
