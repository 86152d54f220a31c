// ABOUTME: Unit conversion constants for body metrics and food amounts
// ABOUTME: Pounds, inches, and ounces expressed against their metric counterparts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pounds in one kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters in one inch
pub const CM_PER_INCH: f64 = 2.54;

/// Grams in one avoirdupois ounce
pub const GRAMS_PER_OZ: f64 = 28.3495;

/// Food nutrient profiles are expressed per this many grams
pub const NUTRIENT_REFERENCE_GRAMS: f64 = 100.0;
