// ABOUTME: Planner configuration for energy, projection, and macro calculations
// ABOUTME: Loads defaults, applies NUTRIPLAN_* environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Configuration is environment-only: compiled-in defaults are overridden by
//! `NUTRIPLAN_*` variables and then validated. The process-wide instance is
//! available through [`NutritionPlannerConfig::global`]; tests and embedders can
//! also construct and pass their own.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, FoodDatabaseConfig, MacroDistribution, MacroEnergyConfig,
    MacroPresetsConfig, ProjectionConfig,
};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<NutritionPlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionPlannerConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Weight projection policy
    pub projection: ProjectionConfig,
    /// Macronutrient energy densities
    pub macro_energy: MacroEnergyConfig,
    /// Named macro strategy presets
    pub macro_presets: MacroPresetsConfig,
    /// Food database source
    pub food_database: FoodDatabaseConfig,
}

impl NutritionPlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if self.projection.kcal_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("kcal_per_kg must be positive"));
        }
        if self.projection.default_daily_adjustment_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_daily_adjustment_kcal must not be negative",
            ));
        }
        if self.projection.max_projection_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_projection_days must be at least 1",
            ));
        }
        if self.projection.zero_adjustment_fallback_days > self.projection.max_projection_days {
            return Err(ConfigError::InvalidRange(
                "zero_adjustment_fallback_days must not exceed max_projection_days",
            ));
        }

        let energy = &self.macro_energy;
        if energy.protein_kcal_per_g <= 0.0
            || energy.carb_kcal_per_g <= 0.0
            || energy.fat_kcal_per_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Macronutrient energy densities must be positive",
            ));
        }

        self.macro_presets.validate()
    }

    /// Reject NaN and infinite values before any range check
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let values = [
            ("bmr.msj_weight_coef", self.bmr.msj_weight_coef),
            ("bmr.msj_height_coef", self.bmr.msj_height_coef),
            ("bmr.msj_age_coef", self.bmr.msj_age_coef),
            ("bmr.msj_male_constant", self.bmr.msj_male_constant),
            ("bmr.msj_female_constant", self.bmr.msj_female_constant),
            ("activity_factors.sedentary", self.activity_factors.sedentary),
            ("activity_factors.lightly_active", self.activity_factors.lightly_active),
            (
                "activity_factors.moderately_active",
                self.activity_factors.moderately_active,
            ),
            ("activity_factors.very_active", self.activity_factors.very_active),
            ("activity_factors.extra_active", self.activity_factors.extra_active),
            ("projection.kcal_per_kg", self.projection.kcal_per_kg),
            (
                "projection.default_daily_adjustment_kcal",
                self.projection.default_daily_adjustment_kcal,
            ),
            ("macro_energy.protein_kcal_per_g", self.macro_energy.protein_kcal_per_g),
            ("macro_energy.carb_kcal_per_g", self.macro_energy.carb_kcal_per_g),
            ("macro_energy.fat_kcal_per_g", self.macro_energy.fat_kcal_per_g),
        ];

        values
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map_or(Ok(()), |(name, _)| Err(ConfigError::NonFinite(name)))
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Projection policy
        Self::apply_env_var("NUTRIPLAN_KCAL_PER_KG", &mut self.projection.kcal_per_kg)?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_DAILY_ADJUSTMENT",
            &mut self.projection.default_daily_adjustment_kcal,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_ZERO_ADJUSTMENT_FALLBACK_DAYS",
            &mut self.projection.zero_adjustment_fallback_days,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_MAX_PROJECTION_DAYS",
            &mut self.projection.max_projection_days,
        )?;

        // Activity factors
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_LIGHTLY_ACTIVE",
            &mut self.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_MODERATELY_ACTIVE",
            &mut self.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_EXTRA_ACTIVE",
            &mut self.activity_factors.extra_active,
        )?;

        // Food database
        // Paths need not be UTF-8
        if let Some(path) = env::var_os("NUTRIPLAN_FOOD_DATABASE_PATH") {
            self.food_database.path = (!path.is_empty()).then(|| PathBuf::from(path));
        }

        Ok(self)
    }
}
