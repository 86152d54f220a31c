// ABOUTME: Energy expenditure calculations using peer-reviewed formulas
// ABOUTME: Mifflin-St Jeor BMR and activity-factor TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Calculator Module
//!
//! Derives basal metabolic rate and total daily energy expenditure from a
//! [`BiometricProfile`] and an [`ActivityLevel`]. Inputs are validated at the
//! boundary (see [`BiometricProfile::validated`]), so every function here is
//! total.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionPlannerConfig};
use nutriplan_core::models::{ActivityLevel, BiometricProfile, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// BMR and TDEE for one profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr_kcal: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Activity multiplier applied to BMR
    pub activity_multiplier: f64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(profile: &BiometricProfile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    let sex_constant = match profile.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Multiplier for an activity level
///
/// Defaults (`McArdle` et al. 2010):
/// - Sedentary: 1.2 (little/no exercise)
/// - Lightly active: 1.375 (1-3 days/week)
/// - Moderately active: 1.55 (3-5 days/week)
/// - Very active: 1.725 (6-7 days/week)
/// - Extra active: 1.9 (physical job + exercise)
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr_kcal: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr_kcal * activity_multiplier(level, config)
}

/// Compute BMR and TDEE for a profile
///
/// Imperial measurements must be converted before building the profile
/// (see [`BiometricProfile::from_imperial`]).
#[must_use]
pub fn compute_energy(
    profile: &BiometricProfile,
    level: ActivityLevel,
    config: &NutritionPlannerConfig,
) -> EnergyEstimate {
    let bmr_kcal = calculate_mifflin_st_jeor(profile, &config.bmr);
    let multiplier = activity_multiplier(level, &config.activity_factors);
    let tdee_kcal = bmr_kcal * multiplier;

    debug!(
        sex = ?profile.sex,
        age = profile.age,
        bmr_kcal,
        tdee_kcal,
        activity = ?level,
        "Computed energy expenditure"
    );

    EnergyEstimate {
        bmr_kcal,
        tdee_kcal,
        activity_multiplier: multiplier,
    }
}
