// ABOUTME: Nutrition tracking models for food lookups and the daily log
// ABOUTME: NutrientProfile, FoodMatch, ScaledNutrients, LogEntry, and MacroTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::log_schema::{DATETIME_FORMAT, DATE_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Per-100g macro values of a food as reported by the nutrient source
///
/// Every field is optional: the source record may omit any of them. Absence is
/// kept distinct from zero until the values are scaled to a serving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy in kcal per 100 g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_kcal_100g: Option<f64>,
    /// Protein in grams per 100 g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_100g: Option<f64>,
    /// Carbohydrates in grams per 100 g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_100g: Option<f64>,
    /// Fat in grams per 100 g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,
}

impl NutrientProfile {
    /// A profile without a positive energy value cannot be logged; zero counts as missing
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.energy_kcal_100g.is_some_and(|kcal| kcal > 0.0)
    }
}

/// First product returned by a food search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodMatch {
    /// Product name as reported by the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Per-100g nutrient values
    pub profile: NutrientProfile,
}

impl FoodMatch {
    /// Display name of the product, or `fallback` when the source gave none
    #[must_use]
    pub fn display_name(&self, fallback: &str) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| fallback.to_owned(), str::to_owned)
    }
}

/// Absolute nutrient amounts for one serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaledNutrients {
    /// Energy (kcal)
    pub kcal: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// One recorded consumption event, as stored in the log file
///
/// Field names double as the CSV column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Calendar day the food was eaten
    #[serde(deserialize_with = "deserialize_log_date")]
    pub date: NaiveDate,
    /// Food name
    pub food: String,
    /// Serving mass in grams
    #[serde(deserialize_with = "deserialize_unknown_as_zero")]
    pub quantity_g: f64,
    /// Energy (kcal)
    #[serde(deserialize_with = "deserialize_unknown_as_zero")]
    pub kcal: f64,
    /// Protein (g)
    #[serde(deserialize_with = "deserialize_unknown_as_zero")]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(deserialize_with = "deserialize_unknown_as_zero")]
    pub carbs: f64,
    /// Fat (g)
    #[serde(deserialize_with = "deserialize_unknown_as_zero")]
    pub fat: f64,
}

impl LogEntry {
    /// Build an entry from a scaled serving
    pub fn new(
        date: NaiveDate,
        food: impl Into<String>,
        quantity_g: f64,
        nutrients: ScaledNutrients,
    ) -> Self {
        Self {
            date,
            food: food.into(),
            quantity_g,
            kcal: nutrients.kcal,
            protein: nutrients.protein,
            carbs: nutrients.carbs,
            fat: nutrients.fat,
        }
    }

    /// Nutrient columns of this entry
    #[must_use]
    pub const fn nutrients(&self) -> ScaledNutrients {
        ScaledNutrients {
            kcal: self.kcal,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

/// Column-wise sums over a set of log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total energy (kcal)
    pub kcal: f64,
    /// Total protein (g)
    pub protein: f64,
    /// Total carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fat: f64,
}

impl MacroTotals {
    /// Sum the nutrient columns of `entries`
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |mut totals, entry| {
            totals.kcal += entry.kcal;
            totals.protein += entry.protein;
            totals.carbs += entry.carbs;
            totals.fat += entry.fat;
            totals
        })
    }
}

/// Accept either a plain date or a midnight timestamp in the `date` column
fn deserialize_log_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT).map(|dt| dt.date()))
        .map_err(|e| serde::de::Error::custom(format!("invalid date '{raw}': {e}")))
}

/// Empty numeric cells load as zero
fn deserialize_unknown_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kcal: f64, protein: f64, carbs: f64, fat: f64) -> LogEntry {
        LogEntry::new(
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            "Apple",
            100.0,
            ScaledNutrients {
                kcal,
                protein,
                carbs,
                fat,
            },
        )
    }

    #[test]
    fn test_profile_completeness_depends_on_energy_only() {
        let missing_macros = NutrientProfile {
            energy_kcal_100g: Some(52.0),
            ..NutrientProfile::default()
        };
        let missing_energy = NutrientProfile {
            energy_kcal_100g: None,
            protein_100g: Some(1.0),
            carbs_100g: Some(2.0),
            fat_100g: Some(3.0),
        };

        assert!(missing_macros.is_complete());
        assert!(!missing_energy.is_complete());
    }

    #[test]
    fn test_zero_energy_is_incomplete() {
        let zero_energy = NutrientProfile {
            energy_kcal_100g: Some(0.0),
            protein_100g: Some(0.0),
            carbs_100g: Some(0.0),
            fat_100g: Some(0.0),
        };

        assert!(!zero_energy.is_complete());
    }

    #[test]
    fn test_display_name_falls_back_on_blank_names() {
        let named = FoodMatch {
            name: Some("Pink Lady".to_owned()),
            profile: NutrientProfile::default(),
        };
        let blank = FoodMatch {
            name: Some("   ".to_owned()),
            profile: NutrientProfile::default(),
        };
        let unnamed = FoodMatch {
            name: None,
            profile: NutrientProfile::default(),
        };

        assert_eq!(named.display_name("Apple"), "Pink Lady");
        assert_eq!(blank.display_name("Apple"), "Apple");
        assert_eq!(unnamed.display_name("Apple"), "Apple");
    }

    #[test]
    fn test_totals_sum_each_column() {
        let entries = vec![entry(78.0, 0.45, 21.0, 0.3), entry(165.0, 31.0, 0.0, 3.6)];
        let totals = MacroTotals::from_entries(&entries);

        assert!((totals.kcal - 243.0).abs() < 1e-9);
        assert!((totals.protein - 31.45).abs() < 1e-9);
        assert!((totals.carbs - 21.0).abs() < 1e-9);
        assert!((totals.fat - 3.9).abs() < 1e-9);
    }

    #[test]
    fn test_totals_of_nothing_are_zero() {
        let none: Vec<LogEntry> = Vec::new();
        assert_eq!(MacroTotals::from_entries(&none), MacroTotals::default());
    }
}
