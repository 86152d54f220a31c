// ABOUTME: Protein quality aggregation across a list of food entries
// ABOUTME: Sums raw and DIAAS-discounted usable protein plus carbs, fats, and calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Protein Quality Aggregator
//!
//! Usable protein is a straight digestibility discount: `protein x diaas / 100`.
//! Amino-acid score capping is not modelled. The "halve it" rule of thumb for
//! foods without a DIAAS value is kept as a separate function,
//! [`estimate_usable_protein_halved`], and is never mixed into [`aggregate`].

use crate::food_database::FoodLookup;
use nutriplan_core::models::{FoodEntry, FoodRecord};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use tracing::debug;

/// Totals for a list of food entries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealAggregate {
    /// Raw protein (g)
    pub protein_g: f64,
    /// DIAAS-discounted protein (g)
    pub usable_protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fats (g)
    pub fats_g: f64,
    /// Energy (kcal)
    pub calories: f64,
}

impl MealAggregate {
    /// Contribution of one resolved entry
    #[must_use]
    pub fn from_record(entry: &FoodEntry, record: &FoodRecord) -> Self {
        let multiplier = entry.nutrient_multiplier();
        let protein_g = record.protein * multiplier;
        Self {
            protein_g,
            usable_protein_g: usable_protein_from_diaas(protein_g, record.diaas),
            carbs_g: record.carbs * multiplier,
            fats_g: record.fats * multiplier,
            calories: record.calories * multiplier,
        }
    }
}

impl Add for MealAggregate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            protein_g: self.protein_g + other.protein_g,
            usable_protein_g: self.usable_protein_g + other.usable_protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fats_g: self.fats_g + other.fats_g,
            calories: self.calories + other.calories,
        }
    }
}

impl AddAssign for MealAggregate {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for MealAggregate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Protein discounted by its DIAAS percentage
#[must_use]
pub fn usable_protein_from_diaas(protein_g: f64, diaas_pct: f64) -> f64 {
    protein_g * (diaas_pct / 100.0)
}

/// Rough usable-protein estimate for plant foods without a DIAAS value: half the raw protein
#[must_use]
pub fn estimate_usable_protein_halved(protein_g: f64) -> f64 {
    protein_g / 2.0
}

/// Aggregate a list of entries against a food lookup
///
/// Entries whose name is not in `lookup` contribute nothing.
pub fn aggregate<L>(entries: &[FoodEntry], lookup: &L) -> MealAggregate
where
    L: FoodLookup + ?Sized,
{
    entries
        .iter()
        .filter_map(|entry| {
            let record = lookup.lookup(&entry.name);
            if record.is_none() {
                debug!(food = %entry.name, "Skipping entry with no food record");
            }
            record.map(|record| MealAggregate::from_record(entry, record))
        })
        .sum()
}
