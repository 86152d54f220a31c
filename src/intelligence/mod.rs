// ABOUTME: Calculation engine for energy targets, weight projection, macros, and protein quality
// ABOUTME: Pure functions composed linearly by the nutrition plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! input -> [`energy_calculator`] -> [`weight_projection`] -> [`macro_allocator`]
//! -> (optional) [`protein_quality`]
//!
//! [`nutrition_plan`] runs the first three stages for a single request. None of
//! these modules hold state between calls.

/// Mifflin-St Jeor BMR and activity-factor TDEE
pub mod energy_calculator;
/// Percentage-based macro split and per-meal division
pub mod macro_allocator;
/// Single-request pipeline over the calculation stages
pub mod nutrition_plan;
/// Raw and DIAAS-discounted protein totals across food entries
pub mod protein_quality;
/// Daily calorie target and day-by-day weight trajectory
pub mod weight_projection;

pub use energy_calculator::{
    activity_multiplier, calculate_mifflin_st_jeor, calculate_tdee, compute_energy,
    EnergyEstimate,
};
pub use macro_allocator::{
    allocate, allocate_strategy, per_meal, validate_distribution, MacroStrategy, MacroTargets,
    MealPlan, MEALS_PER_DAY_RANGE,
};
pub use nutrition_plan::{build_nutrition_plan, EnergyTargets, NutritionPlan, NutritionPlanRequest};
pub use protein_quality::{
    aggregate, estimate_usable_protein_halved, usable_protein_from_diaas, MealAggregate,
};
pub use weight_projection::{
    default_daily_adjustment, plan_weight_projection, ProjectionMode, ProjectionPoint,
    WeightProjection,
};
