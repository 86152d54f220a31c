// ABOUTME: Core types and constants for the nutriplan nutrition calculator
// ABOUTME: Foundation crate with error handling, domain models, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the nutriplan
//! calculation engine. It changes infrequently so the main crate gets the
//! incremental compilation benefits of the workspace split.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors and physiological energy constants
//! - **models**: Biometric profile, goal, and food domain types
//! - **units**: Metric/imperial conversion helpers

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion factors and physiological energy constants
pub mod constants;

/// Core data models (biometrics, goals, foods)
pub mod models;

/// Metric/imperial conversion helpers
pub mod units;
