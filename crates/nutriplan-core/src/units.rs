// ABOUTME: Metric/imperial conversion helpers for weights, heights, and food amounts
// ABOUTME: Provides DisplayUnits and pure conversion functions used at the input/output boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::{CM_PER_INCH, GRAMS_PER_OZ, LBS_PER_KG};

/// Unit system used when presenting body weights
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnits {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

/// Pounds to kilograms
#[must_use]
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds / LBS_PER_KG
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_pounds(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Centimeters to inches
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Ounces to grams
#[must_use]
pub fn ounces_to_grams(ounces: f64) -> f64 {
    ounces * GRAMS_PER_OZ
}
