// ABOUTME: Main library entry point for the nutriplan nutrition calculator
// ABOUTME: Exposes configuration, logging, the calculation engine, food data, and meal sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Computes personalized nutrition targets from biometric inputs: basal
//! metabolic rate, total daily energy expenditure, a goal-driven calorie
//! target with a day-by-day weight projection, a macronutrient split with a
//! per-meal breakdown, and DIAAS-discounted protein totals for a list of foods.
//!
//! The crate is a single-session calculator. It holds no state across calls:
//! the caller owns the [`session::MealSession`] and the
//! [`food_database::FoodDatabase`] snapshot and passes them in by reference.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use nutriplan::config::NutritionPlannerConfig;
//! use nutriplan::intelligence::{build_nutrition_plan, MacroStrategy, NutritionPlanRequest};
//! use nutriplan::models::{ActivityLevel, BiometricProfile, Goal, GoalKind, Sex};
//! use nutriplan::units::DisplayUnits;
//!
//! # fn main() -> Result<(), nutriplan::errors::AppError> {
//! let request = NutritionPlanRequest {
//!     profile: BiometricProfile::validated(Sex::Male, 30, 70.0, 175.0)?,
//!     activity_level: ActivityLevel::Sedentary,
//!     goal: Goal::new(GoalKind::Lose).with_target_weight(65.0),
//!     strategy: MacroStrategy::Balanced,
//!     meals_per_day: 3,
//!     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
//!     display_units: DisplayUnits::Metric,
//! };
//! let plan = build_nutrition_plan(&request, NutritionPlannerConfig::global())?;
//! println!("{} kcal/day for {} days", plan.energy.daily_calorie_target, plan.projection.days);
//! # Ok(())
//! # }
//! ```

/// Environment-driven planner configuration
pub mod config;

/// Unified error handling (re-exported from `nutriplan-core`)
pub mod errors;

/// Read-only food name to nutrient record mapping
pub mod food_database;

/// Calculation engine: energy, projection, macros, protein quality
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Caller-owned meal entry list
pub mod session;

/// Domain models (re-exported from `nutriplan-core`)
pub mod models {
    pub use nutriplan_core::models::*;
}

/// Unit conversions (re-exported from `nutriplan-core`)
pub mod units {
    pub use nutriplan_core::units::*;
}

/// Constants (re-exported from `nutriplan-core`)
pub mod constants {
    pub use nutriplan_core::constants::*;
}
