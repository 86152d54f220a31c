// ABOUTME: Macronutrient allocation from a daily calorie target and a percentage strategy
// ABOUTME: Named presets, custom splits, gram conversion, and uniform per-meal division
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Allocator
//!
//! Splits a daily calorie target into protein, carbohydrate and fat using whole
//! percentages that must sum to exactly 100. Energy densities default to the
//! Atwater factors (4/4/9 kcal per gram). Nothing is rounded here; display
//! precision belongs to the presentation layer.

use crate::config::{MacroDistribution, MacroEnergyConfig, MacroPresetsConfig, NutritionPlannerConfig};
use nutriplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

/// Accepted meals per day
pub const MEALS_PER_DAY_RANGE: RangeInclusive<u8> = 1..=6;

/// Macro strategy: a named preset or a custom split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "preset")]
pub enum MacroStrategy {
    /// Balanced everyday eating
    Balanced,
    /// Protein-forward
    HighProtein,
    /// Reduced carbohydrate
    LowCarb,
    /// Carbohydrate-forward
    Endurance,
    /// User-supplied percentages
    Custom(MacroDistribution),
}

impl MacroStrategy {
    /// Build a custom strategy, rejecting splits that don't sum to 100
    ///
    /// # Errors
    ///
    /// Returns `InvalidStrategy` if `protein_pct + carb_pct + fat_pct != 100`
    pub fn custom(protein_pct: u8, carb_pct: u8, fat_pct: u8) -> AppResult<Self> {
        let distribution = MacroDistribution {
            protein_pct,
            carb_pct,
            fat_pct,
        };
        validate_distribution(&distribution)?;
        Ok(Self::Custom(distribution))
    }

    /// Percentages for this strategy
    #[must_use]
    pub const fn distribution(&self, presets: &MacroPresetsConfig) -> MacroDistribution {
        match self {
            Self::Balanced => presets.balanced,
            Self::HighProtein => presets.high_protein,
            Self::LowCarb => presets.low_carb,
            Self::Endurance => presets.endurance,
            Self::Custom(distribution) => *distribution,
        }
    }
}

/// Daily (or per-meal) macro amounts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carb_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Energy from protein (kcal)
    pub protein_kcal: f64,
    /// Energy from carbohydrate (kcal)
    pub carb_kcal: f64,
    /// Energy from fat (kcal)
    pub fat_kcal: f64,
}

impl MacroTargets {
    /// Total energy across all three macros
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        self.protein_kcal + self.carb_kcal + self.fat_kcal
    }

    /// Every field divided by `divisor`
    #[must_use]
    pub fn divided_by(&self, divisor: f64) -> Self {
        Self {
            protein_g: self.protein_g / divisor,
            carb_g: self.carb_g / divisor,
            fat_g: self.fat_g / divisor,
            protein_kcal: self.protein_kcal / divisor,
            carb_kcal: self.carb_kcal / divisor,
            fat_kcal: self.fat_kcal / divisor,
        }
    }
}

/// Macro targets split evenly across the day's meals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    /// Number of meals (1-6)
    pub meals_per_day: u8,
    /// Amounts for one meal
    pub per_meal: MacroTargets,
    /// Energy of one meal (kcal)
    pub calories_per_meal: f64,
}

/// Check that a split sums to exactly 100
///
/// # Errors
///
/// Returns `InvalidStrategy` otherwise; the split is never auto-corrected
pub fn validate_distribution(distribution: &MacroDistribution) -> AppResult<()> {
    if distribution.total() == 100 {
        Ok(())
    } else {
        Err(AppError::invalid_strategy(
            distribution.protein_pct,
            distribution.carb_pct,
            distribution.fat_pct,
        ))
    }
}

/// Split a daily calorie target by percentage and convert to grams
///
/// # Errors
///
/// Returns `InvalidStrategy` if the percentages don't sum to 100
pub fn allocate(
    daily_calorie_target: f64,
    distribution: &MacroDistribution,
    energy: &MacroEnergyConfig,
) -> AppResult<MacroTargets> {
    validate_distribution(distribution)?;

    let share = |pct: u8| f64::from(pct) / 100.0 * daily_calorie_target;
    let protein_kcal = share(distribution.protein_pct);
    let carb_kcal = share(distribution.carb_pct);
    let fat_kcal = share(distribution.fat_pct);

    let targets = MacroTargets {
        protein_g: protein_kcal / energy.protein_kcal_per_g,
        carb_g: carb_kcal / energy.carb_kcal_per_g,
        fat_g: fat_kcal / energy.fat_kcal_per_g,
        protein_kcal,
        carb_kcal,
        fat_kcal,
    };

    debug!(
        daily_calorie_target,
        protein_g = targets.protein_g,
        carb_g = targets.carb_g,
        fat_g = targets.fat_g,
        "Allocated macros"
    );

    Ok(targets)
}

/// Allocate using a named or custom strategy
///
/// # Errors
///
/// Returns `InvalidStrategy` if the strategy's percentages don't sum to 100
pub fn allocate_strategy(
    daily_calorie_target: f64,
    strategy: &MacroStrategy,
    config: &NutritionPlannerConfig,
) -> AppResult<MacroTargets> {
    let distribution = strategy.distribution(&config.macro_presets);
    allocate(daily_calorie_target, &distribution, &config.macro_energy)
}

/// Divide daily targets uniformly across meals
///
/// # Errors
///
/// Returns `ValueOutOfRange` if `meals_per_day` is outside 1-6
pub fn per_meal(targets: &MacroTargets, meals_per_day: u8) -> AppResult<MealPlan> {
    if !MEALS_PER_DAY_RANGE.contains(&meals_per_day) {
        return Err(AppError::out_of_range(format!(
            "Meals per day must be between {} and {}, got {meals_per_day}",
            MEALS_PER_DAY_RANGE.start(),
            MEALS_PER_DAY_RANGE.end()
        ))
        .with_resource_id("meals_per_day"));
    }

    let per_meal = targets.divided_by(f64::from(meals_per_day));
    Ok(MealPlan {
        meals_per_day,
        calories_per_meal: per_meal.total_kcal(),
        per_meal,
    })
}
