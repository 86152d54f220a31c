// ABOUTME: Error handling re-exports from nutriplan-core
// ABOUTME: Keeps crate::errors paths stable for the main crate and its consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Re-exports [`AppError`], [`ErrorCode`] and friends from the core crate, plus
//! the configuration error type defined next to the configuration loader.

pub use crate::config::ConfigError;
pub use nutriplan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
