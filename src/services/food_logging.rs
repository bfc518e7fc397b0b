// ABOUTME: Food logging pipeline from query to persisted log entry
// ABOUTME: Chains nutrient lookup, serving scaling, and log append/save for one add action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use macro_tracker_core::constants::serving::{MAX_GRAMS, MIN_GRAMS};
use macro_tracker_core::errors::{AppError, AppResult};
use macro_tracker_core::models::LogEntry;
use std::sync::Arc;
use tracing::{info, warn};

use crate::database::{FoodLog, FoodLogStore};
use crate::external::NutrientSource;
use crate::intelligence::scale_serving;
use crate::utils::text::title_case;

/// Result of a single add action that did not fail outright
#[derive(Debug, Clone, PartialEq)]
pub enum AddFoodOutcome {
    /// Entry scaled, appended and saved
    Added {
        /// The persisted entry
        entry: LogEntry,
        /// Title-cased query, used in the confirmation message
        label: String,
    },
    /// The source has no product for the query
    NotFound,
    /// A product matched but its energy value is missing; nothing was written
    IncompleteData {
        /// Name of the matched product
        food: String,
    },
}

/// Check a serving mass against the accepted input range `(0, 2000]`
///
/// # Errors
///
/// Returns `ValueOutOfRange` for non-finite, non-positive, or too large values
pub fn validate_serving_grams(quantity_g: f64) -> AppResult<()> {
    if !quantity_g.is_finite() || quantity_g <= MIN_GRAMS || quantity_g > MAX_GRAMS {
        return Err(AppError::out_of_range(format!(
            "Serving size must be greater than {MIN_GRAMS} g and at most {MAX_GRAMS} g",
        )));
    }
    Ok(())
}

/// Lookup, scale and persist pipeline
pub struct FoodLogService {
    source: Arc<dyn NutrientSource>,
    store: FoodLogStore,
}

impl FoodLogService {
    /// Create a service over a nutrient source and a log store
    pub fn new(source: Arc<dyn NutrientSource>, store: FoodLogStore) -> Self {
        Self { source, store }
    }

    /// Log store used by this service
    #[must_use]
    pub const fn store(&self) -> &FoodLogStore {
        &self.store
    }

    /// Look up `query`, scale it to `quantity_g` and append it to the log dated `today`
    ///
    /// Nothing is written unless the outcome is [`AddFoodOutcome::Added`].
    ///
    /// # Errors
    ///
    /// - `InvalidInput` / `ValueOutOfRange` for a blank query or bad serving
    /// - external service errors when the lookup fails
    /// - storage and format errors when the log cannot be loaded or saved
    pub async fn add_food(
        &self,
        query: &str,
        quantity_g: f64,
        today: NaiveDate,
    ) -> AppResult<AddFoodOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }
        validate_serving_grams(quantity_g)?;

        let label = title_case(query);
        let Some(food) = self.source.lookup(query).await? else {
            info!(query, "No products found");
            return Ok(AddFoodOutcome::NotFound);
        };

        let name = food.display_name(&label);
        if !food.profile.is_complete() {
            warn!(query, food = %name, "Nutrient data incomplete, entry not logged");
            return Ok(AddFoodOutcome::IncompleteData { food: name });
        }

        let nutrients = scale_serving(&food.profile, quantity_g);
        let entry = LogEntry::new(today, name, quantity_g, nutrients);

        let log = self.store.load()?.append(entry.clone());
        self.store.save(&log)?;

        info!(
            food = %entry.food,
            quantity_g,
            kcal = entry.kcal,
            date = %today,
            "Food logged"
        );
        Ok(AddFoodOutcome::Added { entry, label })
    }

    /// Entries logged on `today`
    ///
    /// # Errors
    ///
    /// Returns storage and format errors from loading the log
    pub fn todays_log(&self, today: NaiveDate) -> AppResult<FoodLog> {
        Ok(self.store.load()?.today(today))
    }
}
