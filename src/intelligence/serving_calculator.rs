// ABOUTME: Serving size scaling of per-100g nutrient values
// ABOUTME: Linear conversion from reference values to the absolute amounts of one serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Serving Calculator
//!
//! Food databases report nutrients per 100 g; a log entry stores what was
//! actually eaten. The conversion is `value_100g * quantity_g / 100` per macro.
//! Missing protein, carbohydrate or fat count as zero here. Missing energy also
//! scales to zero, but the logging pipeline rejects such profiles beforehand.

use macro_tracker_core::constants::serving::REFERENCE_GRAMS;
use macro_tracker_core::models::{NutrientProfile, ScaledNutrients};

/// Scale a per-100g profile to a serving of `quantity_g` grams
///
/// The quantity is not range-checked; serving bounds are enforced where the
/// value is entered.
#[must_use]
pub fn scale_serving(profile: &NutrientProfile, quantity_g: f64) -> ScaledNutrients {
    let scale = |per_100g: Option<f64>| per_100g.unwrap_or(0.0) * quantity_g / REFERENCE_GRAMS;

    ScaledNutrients {
        kcal: scale(profile.energy_kcal_100g),
        protein: scale(profile.protein_100g),
        carbs: scale(profile.carbs_100g),
        fat: scale(profile.fat_100g),
    }
}
