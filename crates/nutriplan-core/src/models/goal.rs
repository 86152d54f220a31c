// ABOUTME: Weight goal models driving the projection planner
// ABOUTME: GoalKind, explicit Timeframe windows, and the Goal with optional overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of the weight goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Keep current weight (no daily adjustment)
    #[default]
    Maintain,
    /// Lose weight (daily deficit)
    Lose,
    /// Gain weight (daily surplus)
    Gain,
}

/// Explicit planning window, both ends inclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeframe {
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Day the target weight should be reached
    pub end_date: NaiveDate,
}

impl Timeframe {
    /// Create a new timeframe
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Signed number of days between start and end
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// A weight goal
///
/// A goal with a [`Timeframe`] is planned in override mode; otherwise the
/// planner applies a fixed daily adjustment derived from [`GoalKind`], or
/// `manual_daily_adjustment_kcal` when present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Goal direction
    pub kind: GoalKind,
    /// Target body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Explicit planning window (override mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
    /// Signed kcal/day that replaces the default surplus or deficit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_daily_adjustment_kcal: Option<f64>,
}

impl Goal {
    /// Goal without a target weight
    #[must_use]
    pub const fn new(kind: GoalKind) -> Self {
        Self {
            kind,
            target_weight_kg: None,
            timeframe: None,
            manual_daily_adjustment_kcal: None,
        }
    }

    /// Set the target weight
    #[must_use]
    pub const fn with_target_weight(mut self, target_weight_kg: f64) -> Self {
        self.target_weight_kg = Some(target_weight_kg);
        self
    }

    /// Plan against an explicit window
    #[must_use]
    pub const fn with_timeframe(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.timeframe = Some(Timeframe::new(start_date, end_date));
        self
    }

    /// Replace the default daily adjustment
    #[must_use]
    pub const fn with_manual_adjustment(mut self, kcal_per_day: f64) -> Self {
        self.manual_daily_adjustment_kcal = Some(kcal_per_day);
        self
    }
}
