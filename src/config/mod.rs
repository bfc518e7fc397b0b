// ABOUTME: Configuration management for the tracker
// ABOUTME: Environment-only runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing into [`environment::TrackerConfig`]
pub mod environment;

pub use environment::TrackerConfig;
