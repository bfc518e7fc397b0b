// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides the food logging pipeline used by the web page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they parse the form, call into a service and
//! render whatever comes back.

/// Lookup, scale and persist pipeline for one add action
pub mod food_logging;

pub use food_logging::{validate_serving_grams, AddFoodOutcome, FoodLogService};
