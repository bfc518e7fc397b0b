// ABOUTME: Application constants for the macro tracker
// ABOUTME: Log file schema, serving size bounds, and OpenFoodFacts field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Persisted log file layout
pub mod log_schema {
    /// Default log file location, relative to the working directory
    pub const DEFAULT_LOG_FILE: &str = "food_log.csv";

    /// Column order of the CSV header
    pub const COLUMNS: [&str; 7] = [
        "date",
        "food",
        "quantity_g",
        "kcal",
        "protein",
        "carbs",
        "fat",
    ];

    /// Date format used for the `date` column
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Timestamp format accepted for the `date` column on load
    pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Serving size input policy
pub mod serving {
    /// Smallest accepted serving (exclusive)
    pub const MIN_GRAMS: f64 = 0.0;

    /// Largest accepted serving (inclusive)
    pub const MAX_GRAMS: f64 = 2000.0;

    /// Serving pre-filled in the form
    pub const DEFAULT_GRAMS: f64 = 100.0;

    /// Increment of the numeric input control
    pub const STEP_GRAMS: f64 = 10.0;

    /// Reference mass of per-100g values
    pub const REFERENCE_GRAMS: f64 = 100.0;
}

/// `OpenFoodFacts` search API
pub mod openfoodfacts {
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "OpenFoodFacts";

    /// Public production instance
    pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

    /// Path of the legacy search endpoint
    pub const SEARCH_PATH: &str = "/cgi/search.pl";

    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Only the best match is ever used
    pub const PAGE_SIZE: u32 = 1;

    /// Primary energy key (kcal per 100 g)
    pub const ENERGY_KCAL_100G: &str = "energy-kcal_100g";

    /// Fallback energy key
    pub const ENERGY_KCAL: &str = "energy-kcal";

    /// Protein key (g per 100 g)
    pub const PROTEINS_100G: &str = "proteins_100g";

    /// Carbohydrate key (g per 100 g)
    pub const CARBOHYDRATES_100G: &str = "carbohydrates_100g";

    /// Fat key (g per 100 g)
    pub const FAT_100G: &str = "fat_100g";
}
