// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, default configuration, dates, and a sample food database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriplan`

use chrono::NaiveDate;
use nutriplan::config::NutritionPlannerConfig;
use nutriplan::food_database::FoodDatabase;
use nutriplan::models::FoodRecord;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Default configuration with logging initialized
pub fn test_config() -> NutritionPlannerConfig {
    init_test_logging();
    NutritionPlannerConfig::default()
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Assert two floats are equal within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Small food database with round numbers
pub fn sample_food_database() -> FoodDatabase {
    FoodDatabase::from_records([
        (
            "Chicken breast",
            FoodRecord {
                protein: 31.0,
                carbs: 0.0,
                fats: 3.5,
                calories: 165.0,
                diaas: 100.0,
            },
        ),
        (
            "Oats",
            FoodRecord {
                protein: 13.0,
                carbs: 68.0,
                fats: 6.5,
                calories: 380.0,
                diaas: 50.0,
            },
        ),
        (
            "Lentils",
            FoodRecord {
                protein: 9.0,
                carbs: 20.0,
                fats: 0.5,
                calories: 116.0,
                diaas: 75.0,
            },
        ),
    ])
}
