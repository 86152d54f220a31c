// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors and physiological energy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Energy densities and body-mass energy equivalence
pub mod energy;
