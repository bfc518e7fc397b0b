// ABOUTME: External API client modules (OpenFoodFacts)
// ABOUTME: Defines the nutrient source seam and its HTTP and mock implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! The food logging pipeline only sees [`NutrientSource`]; the production
//! implementation talks to `OpenFoodFacts`, tests use [`MockNutrientSource`].

pub mod openfoodfacts_client;

use async_trait::async_trait;
use macro_tracker_core::errors::AppResult;
use macro_tracker_core::models::FoodMatch;

// Re-export commonly used types
pub use openfoodfacts_client::{MockNutrientSource, OpenFoodFactsClient, OpenFoodFactsConfig};

/// Remote database resolving a free-text query to one food
#[async_trait]
pub trait NutrientSource: Send + Sync {
    /// Look up the best match for `query`
    ///
    /// Returns `Ok(None)` when nothing matches. Every call reaches the source;
    /// results are never cached.
    ///
    /// # Errors
    /// Returns an external service error when the source is unreachable or
    /// answers with a non-success status
    async fn lookup(&self, query: &str) -> AppResult<Option<FoodMatch>>;
}
