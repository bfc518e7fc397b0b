// ABOUTME: Core types and constants for the macro tracker
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Tracker Core
//!
//! Foundation crate providing the shared types of the calorie and macro tracker.
//! It has no I/O of its own: the source adapter, log store and web layer live in
//! the main crate and depend on the types defined here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Log schema, serving bounds and source field names
//! - **models**: `NutrientProfile`, `LogEntry`, `ScaledNutrients` and `MacroTotals`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrition data models shared by every layer
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
