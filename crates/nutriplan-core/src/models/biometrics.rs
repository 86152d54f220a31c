// ABOUTME: Biometric input models for energy expenditure calculations
// ABOUTME: Sex, BiometricProfile with boundary validation, and the closed ActivityLevel set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::units::{inches_to_cm, pounds_to_kg};

/// Youngest age accepted at the input boundary
pub const MIN_AGE_YEARS: u32 = 10;
/// Oldest age accepted at the input boundary
pub const MAX_AGE_YEARS: u32 = 100;
/// Lightest body weight accepted at the input boundary
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Shortest height accepted at the input boundary
pub const MIN_HEIGHT_CM: f64 = 100.0;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal Mifflin-St Jeor constant)
    Male,
    /// Female (-161 kcal Mifflin-St Jeor constant)
    Female,
}

/// Biometric inputs, always in metric units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BiometricProfile {
    /// Biological sex
    pub sex: Sex,
    /// Age in whole years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

impl BiometricProfile {
    /// Build a profile, enforcing the input-boundary ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if age is outside 10-100 years, weight is below
    /// 30 kg, or height is below 100 cm.
    pub fn validated(sex: Sex, age: u32, weight_kg: f64, height_cm: f64) -> AppResult<Self> {
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years, got {age}"
            ))
            .with_resource_id("age"));
        }
        if !weight_kg.is_finite() || weight_kg < MIN_WEIGHT_KG {
            return Err(AppError::out_of_range(format!(
                "Weight must be at least {MIN_WEIGHT_KG} kg, got {weight_kg}"
            ))
            .with_resource_id("weight_kg"));
        }
        if !height_cm.is_finite() || height_cm < MIN_HEIGHT_CM {
            return Err(AppError::out_of_range(format!(
                "Height must be at least {MIN_HEIGHT_CM} cm, got {height_cm}"
            ))
            .with_resource_id("height_cm"));
        }

        Ok(Self {
            sex,
            age,
            weight_kg,
            height_cm,
        })
    }

    /// Build a profile from pounds and inches
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the converted values fail [`Self::validated`].
    pub fn from_imperial(sex: Sex, age: u32, weight_lb: f64, height_in: f64) -> AppResult<Self> {
        Self::validated(sex, age, pounds_to_kg(weight_lb), inches_to_cm(height_in))
    }
}

/// Activity level for TDEE calculation
///
/// Multipliers are resolved through configuration; the defaults are
/// 1.2, 1.375, 1.55, 1.725 and 1.9 in declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (physical job + exercise)
    ExtraActive,
}

impl ActivityLevel {
    /// Every activity level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];
}
