// ABOUTME: Server binary serving the tracker page over HTTP
// ABOUTME: Loads configuration, sets up logging, builds the pipeline, and runs axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Macro Tracker Server Binary
//!
//! Serves the single tracker page on a current-thread runtime. Requests may
//! interleave at the nutrient lookup, the only await of an add action; the
//! `load → append → save` that follows runs without yielding, so no other
//! request touches the log file in between.
//!
//! ```bash
//! macro-tracker-server --http-port 8080 --log-file ~/food_log.csv
//! ```

use anyhow::Result;
use clap::Parser;
use macro_tracker::{
    config::TrackerConfig,
    database::FoodLogStore,
    external::OpenFoodFactsClient,
    logging::LoggingConfig,
    routes::{self, TrackerState},
    services::FoodLogService,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "macro-tracker-server")]
#[command(about = "Personal calorie and macro tracker powered by OpenFoodFacts")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override food log file location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = TrackerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(log_file) = args.log_file {
        config.log_file = log_file;
    }
    info!("{}", config.summary());

    let source = Arc::new(OpenFoodFactsClient::new(config.openfoodfacts.clone())?);
    let store = FoodLogStore::new(config.log_file.clone());
    let service = Arc::new(FoodLogService::new(source, store));
    let app = routes::router(TrackerState::new(service));

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Tracker page available at http://{}/", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
