// ABOUTME: Weight projection planner turning a goal into a calorie target and trajectory
// ABOUTME: Handles explicit-timeframe override mode and fixed-adjustment default mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Projection Planner
//!
//! Two mutually exclusive modes:
//!
//! - **Override**: the goal carries a [`Timeframe`](nutriplan_core::models::Timeframe).
//!   The daily adjustment is whatever spreads the target weight change evenly
//!   over the window (at least one day).
//! - **Default**: a fixed daily adjustment (`-500` lose, `+500` gain, `0`
//!   maintain, or the goal's manual adjustment) and as many whole days as it
//!   takes to reach the target.
//!
//! The trajectory is linear: day `d` weighs `start + adjustment * d / kcal_per_kg`.
//! Projections longer than `max_projection_days` are cut short without changing
//! the adjustment, so a truncated projection stops before the target weight.

use crate::config::ProjectionConfig;
use chrono::{Days, NaiveDate};
use nutriplan_core::models::{Goal, GoalKind};
use nutriplan_core::units::{kg_to_pounds, pounds_to_kg, DisplayUnits};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the daily adjustment was chosen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Derived from an explicit start/end window
    Override,
    /// Fixed adjustment from the goal direction
    Default,
    /// Fixed adjustment supplied by the user
    Manual,
}

/// Projected weight on one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectionPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Days since the start of the projection
    pub day: u32,
    /// Projected weight, in the projection's unit
    pub weight: f64,
}

/// Output of the projection planner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightProjection {
    /// How the adjustment was chosen
    pub mode: ProjectionMode,
    /// Signed kcal/day added to TDEE
    pub daily_adjustment_kcal: f64,
    /// TDEE plus the daily adjustment
    pub daily_calorie_target: f64,
    /// Signed energy needed to reach the target weight
    pub total_kcal_needed: f64,
    /// Length of the projection; there are `days + 1` points
    pub days: u32,
    /// Unit of every point's weight
    pub unit: DisplayUnits,
    /// One point per day, day 0 first
    pub points: Vec<ProjectionPoint>,
}

impl WeightProjection {
    /// Weight on day 0
    #[must_use]
    pub fn start_weight(&self) -> Option<f64> {
        self.points.first().map(|point| point.weight)
    }

    /// Weight on the last projected day
    #[must_use]
    pub fn final_weight(&self) -> Option<f64> {
        self.points.last().map(|point| point.weight)
    }

    /// Date of the last projected day
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|point| point.date)
    }

    /// Re-express every point in `units`
    #[must_use]
    pub fn in_units(mut self, units: DisplayUnits) -> Self {
        let convert: fn(f64) -> f64 = match (self.unit, units) {
            (DisplayUnits::Metric, DisplayUnits::Imperial) => kg_to_pounds,
            (DisplayUnits::Imperial, DisplayUnits::Metric) => pounds_to_kg,
            _ => return self,
        };
        for point in &mut self.points {
            point.weight = convert(point.weight);
        }
        self.unit = units;
        self
    }
}

/// Default-mode adjustment for a goal direction
#[must_use]
pub fn default_daily_adjustment(kind: GoalKind, config: &ProjectionConfig) -> f64 {
    match kind {
        GoalKind::Maintain => 0.0,
        GoalKind::Lose => -config.default_daily_adjustment_kcal,
        GoalKind::Gain => config.default_daily_adjustment_kcal,
    }
}

/// Plan a calorie target and weight trajectory for a goal
///
/// `start_date` dates day 0 in default mode; override mode uses the goal's own
/// window. A missing target weight means "stay at the current weight".
#[must_use]
pub fn plan_weight_projection(
    tdee_kcal: f64,
    current_weight_kg: f64,
    goal: &Goal,
    start_date: NaiveDate,
    config: &ProjectionConfig,
) -> WeightProjection {
    let target_weight_kg = goal.target_weight_kg.unwrap_or(current_weight_kg);
    let total_kcal_needed = (target_weight_kg - current_weight_kg) * config.kcal_per_kg;

    let (mode, start_date, daily_adjustment_kcal, days) = if let Some(timeframe) = goal.timeframe {
        let span = timeframe.span_days();
        if span < 1 {
            warn!(
                start = %timeframe.start_date,
                end = %timeframe.end_date,
                "Degenerate timeframe, clamping to one day"
            );
        }
        let days = span.max(1);
        let adjustment = total_kcal_needed / days as f64;
        (
            ProjectionMode::Override,
            timeframe.start_date,
            adjustment,
            u32::try_from(days).unwrap_or(u32::MAX),
        )
    } else {
        let (mode, adjustment) = goal.manual_daily_adjustment_kcal.map_or_else(
            || {
                (
                    ProjectionMode::Default,
                    default_daily_adjustment(goal.kind, config),
                )
            },
            |manual| (ProjectionMode::Manual, manual),
        );
        let days = days_needed(total_kcal_needed, adjustment, config);
        if moves_away_from_target(total_kcal_needed, adjustment) {
            warn!(
                goal = ?goal.kind,
                current_weight_kg,
                target_weight_kg,
                adjustment,
                "Daily adjustment moves away from the target weight"
            );
        }
        (mode, start_date, adjustment, days)
    };

    let days = cap_days(days, config);
    let points = trajectory(
        current_weight_kg,
        daily_adjustment_kcal,
        start_date,
        days,
        config,
    );
    let daily_calorie_target = tdee_kcal + daily_adjustment_kcal;

    debug!(
        mode = ?mode,
        daily_adjustment_kcal,
        daily_calorie_target,
        days,
        "Planned weight projection"
    );

    WeightProjection {
        mode,
        daily_adjustment_kcal,
        daily_calorie_target,
        total_kcal_needed,
        days,
        unit: DisplayUnits::Metric,
        points,
    }
}

/// Whole days a fixed adjustment needs to cover `total_kcal_needed`
fn days_needed(total_kcal_needed: f64, adjustment: f64, config: &ProjectionConfig) -> u32 {
    if adjustment.abs() < f64::EPSILON {
        return config.zero_adjustment_fallback_days;
    }
    // `as` saturates: NaN becomes 0, huge values become u32::MAX
    (total_kcal_needed / adjustment).abs().floor() as u32
}

fn moves_away_from_target(total_kcal_needed: f64, adjustment: f64) -> bool {
    total_kcal_needed.abs() >= f64::EPSILON
        && adjustment.abs() >= f64::EPSILON
        && (total_kcal_needed > 0.0) != (adjustment > 0.0)
}

fn cap_days(days: u32, config: &ProjectionConfig) -> u32 {
    if days > config.max_projection_days {
        warn!(
            days,
            max = config.max_projection_days,
            "Projection exceeds maximum length, truncating"
        );
        return config.max_projection_days;
    }
    days
}

fn trajectory(
    start_weight_kg: f64,
    daily_adjustment_kcal: f64,
    start_date: NaiveDate,
    days: u32,
    config: &ProjectionConfig,
) -> Vec<ProjectionPoint> {
    (0..=days)
        .map(|day| ProjectionPoint {
            date: start_date
                .checked_add_days(Days::new(u64::from(day)))
                .unwrap_or(NaiveDate::MAX),
            day,
            weight: start_weight_kg + daily_adjustment_kcal * f64::from(day) / config.kcal_per_kg,
        })
        .collect()
}
