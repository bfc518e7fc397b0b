// ABOUTME: Nutrition calculations for the food log
// ABOUTME: Hosts the serving size calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-100g to per-serving scaling
pub mod serving_calculator;

pub use serving_calculator::scale_serving;
