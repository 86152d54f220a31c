// ABOUTME: Core data models for the nutriplan calculation engine
// ABOUTME: Re-exports biometric, goal, and food domain types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data consumed by the engine. Everything here is derived fresh per
//! interaction and carries no session state.

mod biometrics;
mod food;
mod goal;

pub use biometrics::{
    ActivityLevel, BiometricProfile, Sex, MAX_AGE_YEARS, MIN_AGE_YEARS, MIN_HEIGHT_CM,
    MIN_WEIGHT_KG,
};
pub use food::{FoodEntry, FoodRecord, MassUnit};
pub use goal::{Goal, GoalKind, Timeframe};
