// ABOUTME: Core data models for the macro tracker
// ABOUTME: Re-exports nutrient profiles, log entries and totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `NutrientProfile`: per-100g values of a looked-up food, each optional
//! - `FoodMatch`: the product a search resolved to
//! - `ScaledNutrients`: absolute values for one serving
//! - `LogEntry`: one persisted row of the food log
//! - `MacroTotals`: column sums over a day

mod nutrition;

pub use nutrition::{FoodMatch, LogEntry, MacroTotals, NutrientProfile, ScaledNutrients};
