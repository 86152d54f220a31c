// ABOUTME: End-to-end nutrition plan pipeline for a single request
// ABOUTME: Runs energy calculation, weight projection, macro allocation, and per-meal split in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::energy_calculator::compute_energy;
use super::macro_allocator::{allocate_strategy, per_meal, MacroStrategy, MacroTargets, MealPlan};
use super::weight_projection::{plan_weight_projection, WeightProjection};
use crate::config::NutritionPlannerConfig;
use chrono::NaiveDate;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{ActivityLevel, BiometricProfile, Goal};
use nutriplan_core::units::DisplayUnits;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Energy figures for one plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr_kcal: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Calories to eat per day to follow the projection
    pub daily_calorie_target: f64,
}

/// Everything the planner needs for one interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlanRequest {
    /// Biometrics in metric units
    pub profile: BiometricProfile,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Weight goal
    #[serde(default)]
    pub goal: Goal,
    /// Macro split
    pub strategy: MacroStrategy,
    /// Meals per day (1-6)
    pub meals_per_day: u8,
    /// Day 0 of a default-mode projection
    pub start_date: NaiveDate,
    /// Unit for projected weights
    #[serde(default)]
    pub display_units: DisplayUnits,
}

/// Complete plan handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// BMR, TDEE and daily target
    pub energy: EnergyTargets,
    /// Weight trajectory
    pub projection: WeightProjection,
    /// Daily macro targets
    pub macros: MacroTargets,
    /// Per-meal macro targets
    pub meal_plan: MealPlan,
}

/// Build a full plan
///
/// # Errors
///
/// Returns `InvalidStrategy` if the macro split does not sum to 100, or
/// `ValueOutOfRange` if `meals_per_day` is outside 1-6. No partial plan is
/// produced in either case.
pub fn build_nutrition_plan(
    request: &NutritionPlanRequest,
    config: &NutritionPlannerConfig,
) -> AppResult<NutritionPlan> {
    let estimate = compute_energy(&request.profile, request.activity_level, config);

    let projection = plan_weight_projection(
        estimate.tdee_kcal,
        request.profile.weight_kg,
        &request.goal,
        request.start_date,
        &config.projection,
    );

    let energy = EnergyTargets {
        bmr_kcal: estimate.bmr_kcal,
        tdee_kcal: estimate.tdee_kcal,
        daily_calorie_target: projection.daily_calorie_target,
    };

    let macros = allocate_strategy(energy.daily_calorie_target, &request.strategy, config)?;
    let meal_plan = per_meal(&macros, request.meals_per_day)?;
    let projection = projection.in_units(request.display_units);

    info!(
        bmr_kcal = energy.bmr_kcal,
        tdee_kcal = energy.tdee_kcal,
        daily_calorie_target = energy.daily_calorie_target,
        projection_days = projection.days,
        meals_per_day = meal_plan.meals_per_day,
        "Built nutrition plan"
    );

    Ok(NutritionPlan {
        energy,
        projection,
        macros,
        meal_plan,
    })
}
