// ABOUTME: Nutrition configuration for energy, projection, and macro calculations
// ABOUTME: Configures BMR coefficients, activity factors, projection policy, macro presets, and food data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Body-mass energy: Wishnofsky (1958) DOI: 10.1093/ajcn/6.5.542

use super::error::ConfigError;
use nutriplan_core::constants::energy::{
    DEFAULT_DAILY_ADJUSTMENT_KCAL, KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    KCAL_PER_KG_BODY_MASS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (physical job + exercise): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Weight projection policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Energy equivalent of 1 kg of body mass (kcal): 7700
    pub kcal_per_kg: f64,
    /// Magnitude of the default lose/gain adjustment (kcal/day): 500
    pub default_daily_adjustment_kcal: f64,
    /// Projection length when the default-mode adjustment is zero
    pub zero_adjustment_fallback_days: u32,
    /// Hard cap on projection length
    pub max_projection_days: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: KCAL_PER_KG_BODY_MASS,
            default_daily_adjustment_kcal: DEFAULT_DAILY_ADJUSTMENT_KCAL,
            zero_adjustment_fallback_days: 1,
            // Ten years
            max_projection_days: 3650,
        }
    }
}

/// Macronutrient energy densities (kcal per gram)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroEnergyConfig {
    /// Protein: 4 kcal/g
    pub protein_kcal_per_g: f64,
    /// Carbohydrate: 4 kcal/g
    pub carb_kcal_per_g: f64,
    /// Fat: 9 kcal/g
    pub fat_kcal_per_g: f64,
}

impl Default for MacroEnergyConfig {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: KCAL_PER_GRAM_PROTEIN,
            carb_kcal_per_g: KCAL_PER_GRAM_CARB,
            fat_kcal_per_g: KCAL_PER_GRAM_FAT,
        }
    }
}

/// Macro distribution as whole percentages of daily calories
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carb_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carb_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct as u16 + carb_pct as u16 + fat_pct as u16 == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carb_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.protein_pct as u16 + self.carb_pct as u16 + self.fat_pct as u16
    }
}

/// Named macro strategy presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroPresetsConfig {
    /// Balanced everyday eating: 30/40/30
    pub balanced: MacroDistribution,
    /// Protein-forward, e.g. during a cut: 40/30/30
    pub high_protein: MacroDistribution,
    /// Reduced carbohydrate: 40/20/40
    pub low_carb: MacroDistribution,
    /// Carbohydrate-forward for endurance training: 20/50/30
    pub endurance: MacroDistribution,
}

impl Default for MacroPresetsConfig {
    fn default() -> Self {
        Self {
            balanced: MacroDistribution::new(30, 40, 30),
            high_protein: MacroDistribution::new(40, 30, 30),
            low_carb: MacroDistribution::new(40, 20, 40),
            endurance: MacroDistribution::new(20, 50, 30),
        }
    }
}

impl MacroPresetsConfig {
    /// Validate that all presets sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if any preset's percentages
    /// (protein + carbs + fat) do not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let presets = [
            ("balanced", &self.balanced),
            ("high_protein", &self.high_protein),
            ("low_carb", &self.low_carb),
            ("endurance", &self.endurance),
        ];

        for (name, preset) in presets {
            let sum = preset.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

/// Food database source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodDatabaseConfig {
    /// JSON file mapping food names to nutrient records; `None` means no database
    pub path: Option<PathBuf>,
}
