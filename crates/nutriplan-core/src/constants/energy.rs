// ABOUTME: Physiological energy constants used by the calculation engine
// ABOUTME: Macronutrient energy densities and the body-mass energy equivalence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy constants
//!
//! References:
//! - Atwater general factors (USDA Agriculture Handbook No. 74, 1973)
//! - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
//!   *American Journal of Clinical Nutrition*, 6(5), 542-546.

/// Energy in one gram of protein (kcal)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy in one gram of carbohydrate (kcal)
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;

/// Energy in one gram of fat (kcal)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Energy equivalent of one kilogram of body mass change (kcal)
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Default daily surplus or deficit for lose/gain goals (kcal/day)
pub const DEFAULT_DAILY_ADJUSTMENT_KCAL: f64 = 500.0;
