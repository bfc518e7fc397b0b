// ABOUTME: Output rendering for the tracker
// ABOUTME: Server-side HTML for the single tracker page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Tracker page template
pub mod tracker_page;

pub use tracker_page::{render_tracker_page, Notice, NoticeLevel, TrackerPage};
