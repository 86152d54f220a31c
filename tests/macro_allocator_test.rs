// ABOUTME: Algorithm tests for macronutrient allocation and per-meal splitting
// ABOUTME: Covers gram conversion, strict 100% validation, presets, and the 1-6 meal range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::assert_close;
use nutriplan::config::MacroDistribution;
use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::macro_allocator::{
    allocate, allocate_strategy, per_meal, MacroStrategy, MEALS_PER_DAY_RANGE,
};

mod common;

// ============================================================================
// ALLOCATION
// ============================================================================

#[test]
fn test_allocate_20_50_30_on_2000_kcal() {
    let config = common::test_config();
    let split = MacroDistribution::new(20, 50, 30);

    let targets = allocate(2000.0, &split, &config.macro_energy).unwrap();

    assert_close(targets.protein_kcal, 400.0);
    assert_close(targets.carb_kcal, 1000.0);
    assert_close(targets.fat_kcal, 600.0);
    assert_close(targets.protein_g, 100.0);
    assert_close(targets.carb_g, 250.0);
    assert_close(targets.fat_g, 600.0 / 9.0);
}

#[test]
fn test_allocated_energy_sums_to_target() {
    let config = common::test_config();

    for target in [1234.5, 1978.5, 2500.0, 3333.3] {
        for strategy in [
            MacroStrategy::Balanced,
            MacroStrategy::HighProtein,
            MacroStrategy::LowCarb,
            MacroStrategy::Endurance,
            MacroStrategy::custom(35, 35, 30).unwrap(),
        ] {
            let targets = allocate_strategy(target, &strategy, &config).unwrap();
            assert!((targets.total_kcal() - target).abs() < 1e-6);
            assert!((targets.protein_g * 4.0 + targets.carb_g * 4.0 + targets.fat_g * 9.0 - target).abs() < 1e-6);
        }
    }
}

#[test]
fn test_allocate_rejects_sums_other_than_100() {
    let config = common::test_config();

    for (p, c, f, sum) in [(30, 40, 29, 99), (30, 40, 31, 101), (0, 0, 0, 0)] {
        let split = MacroDistribution {
            protein_pct: p,
            carb_pct: c,
            fat_pct: f,
        };
        let err = allocate(2000.0, &split, &config.macro_energy).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStrategy);
        assert_eq!(err.context.details["sum"], sum);
    }
}

#[test]
fn test_custom_strategy_validated_on_construction() {
    let err = MacroStrategy::custom(50, 50, 50).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStrategy);
    assert!(err.message.contains("150%"));

    let ok = MacroStrategy::custom(100, 0, 0).unwrap();
    assert!(matches!(ok, MacroStrategy::Custom(d) if d.protein_pct == 100));
}

#[test]
fn test_presets_resolve_to_configured_distributions() {
    let config = common::test_config();
    let presets = &config.macro_presets;

    assert_eq!(MacroStrategy::Balanced.distribution(presets), MacroDistribution::new(30, 40, 30));
    assert_eq!(MacroStrategy::HighProtein.distribution(presets), MacroDistribution::new(40, 30, 30));
    assert_eq!(MacroStrategy::LowCarb.distribution(presets), MacroDistribution::new(40, 20, 40));
    assert_eq!(MacroStrategy::Endurance.distribution(presets), MacroDistribution::new(20, 50, 30));
}

#[test]
fn test_endurance_preset_matches_reference_split() {
    let config = common::test_config();

    let targets = allocate_strategy(2000.0, &MacroStrategy::Endurance, &config).unwrap();

    assert_close(targets.protein_g, 100.0);
    assert_close(targets.carb_g, 250.0);
}

#[test]
fn test_strategy_serde_shape() {
    let json = serde_json::to_value(MacroStrategy::HighProtein).unwrap();
    assert_eq!(json["preset"], "high_protein");

    let custom: MacroStrategy = serde_json::from_str(
        r#"{"preset":"custom","protein_pct":25,"carb_pct":45,"fat_pct":30}"#,
    )
    .unwrap();
    assert_eq!(custom, MacroStrategy::Custom(MacroDistribution::new(25, 45, 30)));
}

// ============================================================================
// PER-MEAL SPLIT
// ============================================================================

#[test]
fn test_per_meal_divides_uniformly_for_every_valid_count() {
    let config = common::test_config();
    let daily = allocate_strategy(2400.0, &MacroStrategy::Balanced, &config).unwrap();

    for meals in MEALS_PER_DAY_RANGE {
        let plan = per_meal(&daily, meals).unwrap();
        let n = f64::from(meals);

        assert_eq!(plan.meals_per_day, meals);
        assert!((plan.per_meal.protein_g * n - daily.protein_g).abs() < 1e-9);
        assert!((plan.per_meal.carb_g * n - daily.carb_g).abs() < 1e-9);
        assert!((plan.per_meal.fat_g * n - daily.fat_g).abs() < 1e-9);
        assert!((plan.calories_per_meal * n - 2400.0).abs() < 1e-9);
    }
}

#[test]
fn test_per_meal_rejects_out_of_range_counts() {
    let config = common::test_config();
    let daily = allocate_strategy(2000.0, &MacroStrategy::Balanced, &config).unwrap();

    for meals in [0, 7, u8::MAX] {
        let err = per_meal(&daily, meals).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.resource_id.as_deref(), Some("meals_per_day"));
    }
}
