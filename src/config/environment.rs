// ABOUTME: Environment configuration management for the tracker server
// ABOUTME: Reads log file location, HTTP binding, and OpenFoodFacts client settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `FOOD_LOG_PATH` | `food_log.csv` |
//! | `OPENFOODFACTS_BASE_URL` | `https://world.openfoodfacts.org` |
//! | `OPENFOODFACTS_TIMEOUT_SECS` | `10` |
//! | `OPENFOODFACTS_USER_AGENT` | `macro-tracker/<version>` |
//! | `HTTP_HOST` | `127.0.0.1` |
//! | `HTTP_PORT` | `8501` |

use crate::external::OpenFoodFactsConfig;
use macro_tracker_core::constants::log_schema::DEFAULT_LOG_FILE;
use macro_tracker_core::errors::{AppError, AppResult, ErrorCode};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Default HTTP bind host
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8501;

/// Complete runtime configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Interface the page is served on
    pub http_host: String,
    /// Port the page is served on
    pub http_port: u16,
    /// CSV file holding the food log
    pub log_file: PathBuf,
    /// Nutrient source client settings
    pub openfoodfacts: OpenFoodFactsConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            http_host: DEFAULT_HTTP_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            openfoodfacts: OpenFoodFactsConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a numeric variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let defaults = Self::default();

        Ok(Self {
            http_host: env_var_or("HTTP_HOST", &defaults.http_host),
            http_port: parse_env_or("HTTP_PORT", defaults.http_port)?,
            log_file: env::var("FOOD_LOG_PATH").map_or(defaults.log_file, PathBuf::from),
            openfoodfacts: OpenFoodFactsConfig {
                base_url: env_var_or("OPENFOODFACTS_BASE_URL", &defaults.openfoodfacts.base_url),
                timeout_secs: parse_env_or(
                    "OPENFOODFACTS_TIMEOUT_SECS",
                    defaults.openfoodfacts.timeout_secs,
                )?,
                user_agent: env_var_or(
                    "OPENFOODFACTS_USER_AGENT",
                    &defaults.openfoodfacts.user_agent,
                ),
            },
        })
    }

    /// `host:port` to bind the HTTP listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Macro Tracker Configuration:\n\
             - HTTP: {}\n\
             - Food Log: {}\n\
             - OpenFoodFacts: {}\n\
             - Lookup Timeout: {}s",
            self.bind_address(),
            self.log_file.display(),
            self.openfoodfacts.base_url,
            self.openfoodfacts.timeout_secs
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid {key} value '{raw}': {e}"),
        )
    })
}
