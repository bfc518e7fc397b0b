// ABOUTME: Main library entry point for the personal calorie and macro tracker
// ABOUTME: Wires nutrient lookup, serving scaling, CSV food log, and the web page together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Tracker
//!
//! A single-user food log. A food is looked up on `OpenFoodFacts`, its per-100g
//! values are scaled to the eaten serving, the result is appended to a CSV
//! file, and a page shows today's entries with their totals.
//!
//! ## Architecture
//!
//! - **external**: `NutrientSource` seam and the `OpenFoodFacts` client
//! - **intelligence**: serving calculator
//! - **database**: CSV-backed food log store
//! - **services**: lookup → scale → append → save pipeline
//! - **formatters** / **routes**: server-rendered page over axum
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use macro_tracker::config::TrackerConfig;
//! use macro_tracker::database::FoodLogStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TrackerConfig::from_env()?;
//! let log = FoodLogStore::new(&config.log_file).load()?;
//! println!("{} entries logged so far", log.len());
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// CSV food log storage
pub mod database;

/// External nutrient database clients
pub mod external;

/// HTML rendering of the tracker page
pub mod formatters;

/// Nutrition calculations
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

/// HTTP routes
pub mod routes;

/// Food logging pipeline
pub mod services;

/// Shared helpers
pub mod utils;

pub use macro_tracker_core::{constants, errors, models};
