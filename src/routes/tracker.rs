// ABOUTME: Route handlers for the tracker page and its add-to-log form
// ABOUTME: Turns pipeline outcomes into page notices and renders today's summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tracker page routes
//!
//! `GET /` renders the page; `POST /` runs one add action and renders the page
//! again with the outcome. Each request re-reads the log file; nothing is kept
//! between requests. Source failures become a message on the page, storage
//! failures abort the request.

use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use macro_tracker_core::constants::serving::DEFAULT_GRAMS;
use macro_tracker_core::errors::AppResult;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::formatters::tracker_page::{render_tracker_page, Notice, TrackerPage};
use crate::services::{validate_serving_grams, AddFoodOutcome, FoodLogService};

/// Shared state of the tracker routes
#[derive(Clone)]
pub struct TrackerState {
    service: Arc<FoodLogService>,
    today: fn() -> NaiveDate,
}

impl TrackerState {
    /// State dating entries with the local calendar day
    #[must_use]
    pub fn new(service: Arc<FoodLogService>) -> Self {
        Self {
            service,
            today: local_today,
        }
    }

    /// Replace the calendar used to date entries and pick today's rows
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Submitted add-to-log form
#[derive(Debug, Default, Deserialize)]
pub struct AddFoodForm {
    /// Free-text food query
    #[serde(default)]
    pub query: String,
    /// Serving mass as typed; parsed by the handler
    #[serde(default)]
    pub quantity_g: String,
}

/// Tracker route definitions
pub struct TrackerRoutes;

impl TrackerRoutes {
    /// Create the page routes
    pub fn routes(state: TrackerState) -> Router {
        Router::new()
            .route("/", get(show_page).post(add_to_log))
            .with_state(state)
    }
}

async fn show_page(State(state): State<TrackerState>) -> AppResult<Html<String>> {
    render(&state, "", DEFAULT_GRAMS, None)
}

async fn add_to_log(
    State(state): State<TrackerState>,
    Form(form): Form<AddFoodForm>,
) -> AppResult<Html<String>> {
    let query = form.query.trim();
    let parsed_quantity = form.quantity_g.trim().parse::<f64>().ok();
    let quantity_g = parsed_quantity.unwrap_or(DEFAULT_GRAMS);

    if query.is_empty() {
        debug!("Add requested without a query, ignoring");
        return render(&state, query, quantity_g, None);
    }

    let Some(quantity_g) = parsed_quantity else {
        debug!(raw = %form.quantity_g, "Serving size is not a number");
        let notice = Notice::warning("Serving size must be a number of grams.");
        return render(&state, query, quantity_g, Some(notice));
    };
    if let Err(e) = validate_serving_grams(quantity_g) {
        debug!(quantity_g, "Serving size out of range");
        return render(&state, query, quantity_g, Some(Notice::warning(e.message)));
    }

    let today = (state.today)();
    let notice = match state.service.add_food(query, quantity_g, today).await {
        Ok(AddFoodOutcome::Added { label, .. }) => {
            // Debug keeps the decimal point: "150.0", "12.5"
            Notice::success(format!("Added {label} ({quantity_g:?} g)"))
        }
        Ok(AddFoodOutcome::NotFound) => Notice::warning("No products found."),
        Ok(AddFoodOutcome::IncompleteData { .. }) => {
            Notice::warning("Nutrient data incomplete for this item.")
        }
        Err(e) if e.code.is_external() => {
            warn!(query, error = %e, "Nutrient lookup failed");
            Notice::error("Error contacting OpenFoodFacts")
        }
        Err(e) => return Err(e),
    };

    render(&state, query, quantity_g, Some(notice))
}

fn render(
    state: &TrackerState,
    query: &str,
    quantity_g: f64,
    notice: Option<Notice>,
) -> AppResult<Html<String>> {
    let today = (state.today)();
    let todays_log = state.service.todays_log(today)?;

    Ok(Html(render_tracker_page(&TrackerPage {
        query,
        quantity_g,
        notice,
        today,
        todays_log: &todays_log,
    })))
}
