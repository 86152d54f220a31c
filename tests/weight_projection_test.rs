// ABOUTME: Algorithm tests for the weight projection planner
// ABOUTME: Covers override mode, default and manual fixed adjustments, unit display, and truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::{assert_close, date};
use nutriplan::intelligence::weight_projection::{
    default_daily_adjustment, plan_weight_projection, ProjectionMode,
};
use nutriplan::models::{Goal, GoalKind};
use nutriplan::units::{kg_to_pounds, DisplayUnits};

mod common;

const TDEE: f64 = 2400.0;

// ============================================================================
// OVERRIDE MODE - explicit timeframe
// ============================================================================

#[test]
fn test_override_reaches_target_on_end_date() {
    let config = common::test_config();
    let start = date(2025, 1, 1);
    let end = date(2025, 3, 2);
    let goal = Goal::new(GoalKind::Lose)
        .with_target_weight(75.0)
        .with_timeframe(start, end);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2030, 6, 1), &config.projection);

    assert_eq!(projection.mode, ProjectionMode::Override);
    assert_eq!(projection.days, 60);
    assert_eq!(projection.points.len(), 61);
    assert_close(projection.total_kcal_needed, -38_500.0);
    assert_close(projection.daily_adjustment_kcal, -38_500.0 / 60.0);
    assert_close(projection.daily_calorie_target, TDEE - 38_500.0 / 60.0);
    assert_close(projection.start_weight().unwrap(), 80.0);
    assert!((projection.final_weight().unwrap() - 75.0).abs() < 1e-6);
    assert_eq!(projection.points[0].date, start);
    assert_eq!(projection.end_date(), Some(end));
}

#[test]
fn test_override_ignores_goal_direction_and_manual_adjustment() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Maintain)
        .with_target_weight(82.0)
        .with_manual_adjustment(-900.0)
        .with_timeframe(date(2025, 5, 1), date(2025, 5, 31));

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 5, 1), &config.projection);

    assert_eq!(projection.mode, ProjectionMode::Override);
    assert_close(projection.daily_adjustment_kcal, 2.0 * 7700.0 / 30.0);
}

#[test]
fn test_override_degenerate_timeframe_clamps_to_one_day() {
    let config = common::test_config();
    let day = date(2025, 7, 4);

    for end in [day, date(2025, 7, 1)] {
        let goal = Goal::new(GoalKind::Lose)
            .with_target_weight(79.0)
            .with_timeframe(day, end);

        let projection = plan_weight_projection(TDEE, 80.0, &goal, day, &config.projection);

        assert_eq!(projection.days, 1);
        assert_eq!(projection.points.len(), 2);
        assert_close(projection.daily_adjustment_kcal, -7700.0);
        assert!(projection.daily_adjustment_kcal.is_finite());
        assert!((projection.final_weight().unwrap() - 79.0).abs() < 1e-9);
    }
}

// ============================================================================
// DEFAULT MODE - fixed adjustment by goal direction
// ============================================================================

#[test]
fn test_default_adjustments_by_goal_kind() {
    let config = common::test_config();

    assert_close(default_daily_adjustment(GoalKind::Lose, &config.projection), -500.0);
    assert_close(default_daily_adjustment(GoalKind::Gain, &config.projection), 500.0);
    assert_close(default_daily_adjustment(GoalKind::Maintain, &config.projection), 0.0);
}

#[test]
fn test_default_lose_five_kg_takes_77_days() {
    let config = common::test_config();
    let start = date(2025, 1, 1);
    let goal = Goal::new(GoalKind::Lose).with_target_weight(75.0);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, start, &config.projection);

    assert_eq!(projection.mode, ProjectionMode::Default);
    assert_eq!(projection.days, 77);
    assert_eq!(projection.points.len(), 78);
    assert_close(projection.daily_adjustment_kcal, -500.0);
    assert_close(projection.daily_calorie_target, TDEE - 500.0);
    assert!((projection.final_weight().unwrap() - 75.0).abs() < 1e-9);
    assert_eq!(projection.end_date(), Some(date(2025, 3, 19)));
}

#[test]
fn test_default_gain_truncates_partial_days() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Gain).with_target_weight(72.0);

    let projection = plan_weight_projection(TDEE, 70.0, &goal, date(2025, 1, 1), &config.projection);

    // 15400 / 500 = 30.8
    assert_eq!(projection.days, 30);
    assert_close(projection.daily_calorie_target, TDEE + 500.0);
    assert!(projection.final_weight().unwrap() < 72.0);
}

#[test]
fn test_default_trajectory_is_linear() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Lose).with_target_weight(75.0);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 1, 1), &config.projection);

    for (i, point) in projection.points.iter().enumerate() {
        assert_eq!(point.day as usize, i);
        assert_close(point.weight, 80.0 - 500.0 * f64::from(point.day) / 7700.0);
    }
}

#[test]
fn test_maintain_produces_flat_two_point_projection() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Maintain);

    let projection = plan_weight_projection(TDEE, 68.0, &goal, date(2025, 1, 1), &config.projection);

    assert_eq!(projection.mode, ProjectionMode::Default);
    assert_eq!(projection.days, 1);
    assert_close(projection.daily_adjustment_kcal, 0.0);
    assert_close(projection.daily_calorie_target, TDEE);
    assert!(projection.points.iter().all(|p| (p.weight - 68.0).abs() < 1e-12));
}

#[test]
fn test_maintain_with_distant_target_does_not_divide_by_zero() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Maintain).with_target_weight(60.0);

    let projection = plan_weight_projection(TDEE, 68.0, &goal, date(2025, 1, 1), &config.projection);

    assert_eq!(projection.days, config.projection.zero_adjustment_fallback_days);
    assert!(projection.points.iter().all(|p| p.weight.is_finite()));
}

#[test]
fn test_target_equal_to_current_weight_gives_single_point() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Lose).with_target_weight(80.0);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 1, 1), &config.projection);

    assert_eq!(projection.days, 0);
    assert_eq!(projection.points.len(), 1);
    assert_close(projection.daily_calorie_target, TDEE - 500.0);
}

// ============================================================================
// MANUAL MODE - user-supplied adjustment
// ============================================================================

#[test]
fn test_manual_adjustment_replaces_default() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Lose)
        .with_target_weight(75.0)
        .with_manual_adjustment(-250.0);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 1, 1), &config.projection);

    assert_eq!(projection.mode, ProjectionMode::Manual);
    assert_eq!(projection.days, 154);
    assert_close(projection.daily_calorie_target, TDEE - 250.0);
}

#[test]
fn test_manual_adjustment_in_wrong_direction_still_projects() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Gain)
        .with_target_weight(85.0)
        .with_manual_adjustment(-300.0);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 1, 1), &config.projection);

    // |38500 / -300| = 128.33
    assert_eq!(projection.days, 128);
    assert!(projection.final_weight().unwrap() < 80.0);
}

// ============================================================================
// DISPLAY UNITS AND LIMITS
// ============================================================================

#[test]
fn test_projection_in_imperial_units() {
    let config = common::test_config();
    let goal = Goal::new(GoalKind::Lose).with_target_weight(75.0);

    let metric = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 1, 1), &config.projection);
    let imperial = metric.clone().in_units(DisplayUnits::Imperial);

    assert_eq!(imperial.unit, DisplayUnits::Imperial);
    assert_eq!(imperial.days, metric.days);
    for (kg, lb) in metric.points.iter().zip(&imperial.points) {
        assert_close(lb.weight, kg_to_pounds(kg.weight));
        assert_eq!(lb.date, kg.date);
    }

    let back = imperial.in_units(DisplayUnits::Metric);
    assert!((back.final_weight().unwrap() - 75.0).abs() < 1e-9);
}

#[test]
fn test_projection_truncated_to_max_days() {
    let mut config = common::test_config();
    config.projection.max_projection_days = 10;
    let goal = Goal::new(GoalKind::Lose).with_target_weight(75.0);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 1, 1), &config.projection);

    assert_eq!(projection.days, 10);
    assert_eq!(projection.points.len(), 11);
    assert_close(projection.daily_adjustment_kcal, -500.0);
}

#[test]
fn test_custom_kcal_per_kg() {
    let mut config = common::test_config();
    config.projection.kcal_per_kg = 7000.0;
    let goal = Goal::new(GoalKind::Lose).with_target_weight(79.0);

    let projection = plan_weight_projection(TDEE, 80.0, &goal, date(2025, 1, 1), &config.projection);

    assert_close(projection.total_kcal_needed, -7000.0);
    assert_eq!(projection.days, 14);
}

#[test]
fn test_override_truncation_keeps_full_span_adjustment() {
    let mut config = common::test_config();
    config.projection.max_projection_days = 10;
    let start = date(2025, 1, 1);
    let goal = Goal::new(GoalKind::Lose)
        .with_target_weight(77.0)
        .with_timeframe(start, date(2025, 1, 31));

    let projection = plan_weight_projection(TDEE, 80.0, &goal, start, &config.projection);

    // -23100 kcal over 30 days, only the first 10 projected
    assert_eq!(projection.mode, ProjectionMode::Override);
    assert_eq!(projection.days, 10);
    assert_eq!(projection.points.len(), 11);
    assert_close(projection.daily_adjustment_kcal, -770.0);
    assert_close(projection.daily_calorie_target, TDEE - 770.0);
    assert_eq!(projection.end_date(), Some(date(2025, 1, 11)));
    assert!((projection.final_weight().unwrap() - 79.0).abs() < 1e-9);
    assert!(projection.final_weight().unwrap() > 77.0);
}
