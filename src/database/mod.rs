// ABOUTME: Persistence layer for the macro tracker
// ABOUTME: Exposes the CSV-backed food log store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CSV food log and its in-memory representation
pub mod food_log;

pub use food_log::{FoodLog, FoodLogStore};
