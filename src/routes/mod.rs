// ABOUTME: Route module organization for the tracker HTTP endpoints
// ABOUTME: Assembles the page routes with request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the tracker
//!
//! Handlers are thin: they parse the request, delegate to
//! [`crate::services`] and render through [`crate::formatters`].

/// Single-page tracker routes
pub mod tracker;

pub use tracker::{AddFoodForm, TrackerRoutes, TrackerState};

use axum::Router;
use tower_http::trace::TraceLayer;

/// Complete application router
pub fn router(state: TrackerState) -> Router {
    TrackerRoutes::routes(state).layer(TraceLayer::new_for_http())
}
