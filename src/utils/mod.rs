// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains shared text helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Label formatting helpers
pub mod text;
