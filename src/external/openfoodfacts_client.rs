// ABOUTME: OpenFoodFacts search API client for per-100g nutrient lookups
// ABOUTME: Resolves a free-text query to its first product and extracts energy and macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `OpenFoodFacts` API Client
//!
//! `OpenFoodFacts` is a free, collaborative food product database. Its legacy
//! search endpoint needs no API key; only the first result of a search is used.
//!
//! # Features
//! - Single-result food search by free-text query
//! - Energy extraction with a fallback key for records lacking `energy-kcal_100g`
//! - Fixed request timeout, no retry and no caching
//! - Mock source for testing
//!
//! # API Reference
//! <https://openfoodfacts.github.io/openfoodfacts-server/api/>
//!
//! # Example
//! ```rust,no_run
//! use macro_tracker::external::{NutrientSource, OpenFoodFactsClient, OpenFoodFactsConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenFoodFactsClient::new(OpenFoodFactsConfig::default())?;
//! if let Some(food) = client.lookup("apple").await? {
//!     println!("{:?}", food.profile.energy_kcal_100g);
//! }
//! # Ok(())
//! # }
//! ```

use super::NutrientSource;
use async_trait::async_trait;
use macro_tracker_core::constants::openfoodfacts::{
    CARBOHYDRATES_100G, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENERGY_KCAL, ENERGY_KCAL_100G,
    FAT_100G, PAGE_SIZE, PROTEINS_100G, SEARCH_PATH, SERVICE_NAME,
};
use macro_tracker_core::errors::{AppError, AppResult};
use macro_tracker_core::models::{FoodMatch, NutrientProfile};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// `OpenFoodFacts` client configuration
#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
    /// Base URL of the instance (default: <https://world.openfoodfacts.org>)
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// `User-Agent` sent with every request, as the API usage policy asks
    pub user_agent: String,
}

impl Default for OpenFoodFactsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("macro-tracker/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Search endpoint response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Total matches; a number on most instances, a string on some
    #[serde(default)]
    count: Option<Value>,
    /// Some instances send `null` instead of an empty array
    #[serde(default)]
    products: Option<Vec<ProductRecord>>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Option<HashMap<String, Value>>,
}

impl SearchResponse {
    fn match_count(&self) -> u64 {
        match &self.count {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// First product, or `None` when the search matched nothing
    fn into_first_match(self) -> Option<FoodMatch> {
        if self.match_count() == 0 {
            return None;
        }
        let product = self.products?.into_iter().next()?;
        Some(FoodMatch {
            name: product.product_name,
            profile: extract_profile(&product.nutriments.unwrap_or_default()),
        })
    }
}

/// Pull the per-100g values out of a product's nutrient map
fn extract_profile(nutriments: &HashMap<String, Value>) -> NutrientProfile {
    NutrientProfile {
        // A zero under the primary key is an unfilled field; try the fallback
        energy_kcal_100g: nutrient_value(nutriments, ENERGY_KCAL_100G)
            .filter(|kcal| *kcal != 0.0)
            .or_else(|| nutrient_value(nutriments, ENERGY_KCAL)),
        protein_100g: nutrient_value(nutriments, PROTEINS_100G),
        carbs_100g: nutrient_value(nutriments, CARBOHYDRATES_100G),
        fat_100g: nutrient_value(nutriments, FAT_100G),
    }
}

/// Numbers and numeric strings count; anything else is absent
fn nutrient_value(nutriments: &HashMap<String, Value>, key: &str) -> Option<f64> {
    let value = match nutriments.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

/// `OpenFoodFacts` search client
pub struct OpenFoodFactsClient {
    config: OpenFoodFactsConfig,
    http_client: reqwest::Client,
}

impl OpenFoodFactsClient {
    /// Create a new client
    ///
    /// # Errors
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: OpenFoodFactsConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Search for the first product matching `query`
    ///
    /// # Returns
    /// `Ok(None)` when the search has zero matches
    ///
    /// # Errors
    /// Returns an external service error on transport failure, timeout,
    /// non-success status, or an undecodable body
    pub async fn search_first(&self, query: &str) -> AppResult<Option<FoodMatch>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let url = format!(
            "{}{SEARCH_PATH}",
            self.config.base_url.trim_end_matches('/')
        );
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    AppError::external_unavailable(SERVICE_NAME, e.to_string())
                } else {
                    AppError::external_service(SERVICE_NAME, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, query, "OpenFoodFacts search returned non-success status");
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}"),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        let count = search_response.match_count();
        let first = search_response.into_first_match();
        debug!(query, count, found = first.is_some(), "OpenFoodFacts search completed");
        Ok(first)
    }
}

#[async_trait]
impl NutrientSource for OpenFoodFactsClient {
    async fn lookup(&self, query: &str) -> AppResult<Option<FoodMatch>> {
        self.search_first(query).await
    }
}

/// Mock nutrient source for testing (no API calls)
///
/// Matches a query against the registered food names by case-insensitive
/// substring, in registration order.
pub struct MockNutrientSource {
    foods: Vec<(String, FoodMatch)>,
    failure_status: Option<u16>,
    calls: AtomicUsize,
}

impl MockNutrientSource {
    /// Create a new mock source with predefined test data
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_food(
                "apple",
                FoodMatch {
                    name: Some("Apples, raw, with skin".to_owned()),
                    profile: NutrientProfile {
                        energy_kcal_100g: Some(52.0),
                        protein_100g: Some(0.3),
                        carbs_100g: Some(14.0),
                        fat_100g: Some(0.2),
                    },
                },
            )
            .with_food(
                "chicken breast",
                FoodMatch {
                    name: Some("Chicken breast, roasted".to_owned()),
                    profile: NutrientProfile {
                        energy_kcal_100g: Some(165.0),
                        protein_100g: Some(31.02),
                        carbs_100g: Some(0.0),
                        fat_100g: Some(3.57),
                    },
                },
            )
    }

    /// Create a mock source that knows no foods
    #[must_use]
    pub fn empty() -> Self {
        Self {
            foods: Vec::new(),
            failure_status: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Register a food under `key`
    #[must_use]
    pub fn with_food(mut self, key: &str, food: FoodMatch) -> Self {
        self.foods.push((key.to_lowercase(), food));
        self
    }

    /// Make every lookup fail as if the remote returned `status`
    #[must_use]
    pub const fn failing_with_status(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    /// Number of lookups performed so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockNutrientSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NutrientSource for MockNutrientSource {
    async fn lookup(&self, query: &str) -> AppResult<Option<FoodMatch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.failure_status {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}"),
            ));
        }

        let query_lower = query.trim().to_lowercase();
        Ok(self
            .foods
            .iter()
            .find(|(key, _)| key.contains(&query_lower) || query_lower.contains(key.as_str()))
            .map(|(_, food)| food.clone()))
    }
}
