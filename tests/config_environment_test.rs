// ABOUTME: Unit tests for environment-based tracker configuration
// ABOUTME: Validates defaults, overrides, and rejection of malformed numeric variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macro_tracker::config::TrackerConfig;
use macro_tracker::errors::ErrorCode;
use macro_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const TRACKER_VARS: [&str; 6] = [
    "FOOD_LOG_PATH",
    "OPENFOODFACTS_BASE_URL",
    "OPENFOODFACTS_TIMEOUT_SECS",
    "OPENFOODFACTS_USER_AGENT",
    "HTTP_HOST",
    "HTTP_PORT",
];

fn clear_tracker_env() {
    for key in TRACKER_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_tracker_env();

    let config = TrackerConfig::from_env().unwrap();

    assert_eq!(config.http_host, "127.0.0.1");
    assert_eq!(config.http_port, 8501);
    assert_eq!(config.log_file, PathBuf::from("food_log.csv"));
    assert_eq!(
        config.openfoodfacts.base_url,
        "https://world.openfoodfacts.org"
    );
    assert_eq!(config.openfoodfacts.timeout_secs, 10);
    assert!(config.openfoodfacts.user_agent.starts_with("macro-tracker/"));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_tracker_env();
    env::set_var("FOOD_LOG_PATH", "/tmp/my_log.csv");
    env::set_var("OPENFOODFACTS_BASE_URL", "http://localhost:9000");
    env::set_var("OPENFOODFACTS_TIMEOUT_SECS", "3");
    env::set_var("HTTP_HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9090");

    let config = TrackerConfig::from_env().unwrap();
    clear_tracker_env();

    assert_eq!(config.log_file, PathBuf::from("/tmp/my_log.csv"));
    assert_eq!(config.openfoodfacts.base_url, "http://localhost:9000");
    assert_eq!(config.openfoodfacts.timeout_secs, 3);
    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert!(config.summary().contains("/tmp/my_log.csv"));
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_tracker_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let error = TrackerConfig::from_env().unwrap_err();
    clear_tracker_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_invalid_timeout_is_rejected() {
    clear_tracker_env();
    env::set_var("OPENFOODFACTS_TIMEOUT_SECS", "soon");

    let error = TrackerConfig::from_env().unwrap_err();
    clear_tracker_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
}
