// ABOUTME: Flat-file food log storage backed by a CSV file
// ABOUTME: Loads, appends, filters and fully rewrites the ordered list of log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food log persistence
//!
//! The whole log lives in one CSV file with the header
//! `date,food,quantity_g,kcal,protein,carbs,fat`. It is read completely on
//! every render and rewritten completely on every save. There is no locking:
//! a single process is expected to own the file.

use chrono::NaiveDate;
use macro_tracker_core::constants::log_schema::COLUMNS;
use macro_tracker_core::errors::{AppError, AppResult};
use macro_tracker_core::models::{LogEntry, MacroTotals};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ordered, append-only sequence of log entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodLog {
    entries: Vec<LogEntry>,
}

impl FoodLog {
    /// Empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Log with `entry` placed after every existing entry
    #[must_use]
    pub fn append(mut self, entry: LogEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Entries dated `day`, order preserved
    #[must_use]
    pub fn today(&self, day: NaiveDate) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.date == day)
                .cloned()
                .collect(),
        }
    }

    /// Column sums of kcal, protein, carbs and fat
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        MacroTotals::from_entries(&self.entries)
    }
}

impl From<Vec<LogEntry>> for FoodLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}

/// CSV file holding the food log
#[derive(Debug, Clone)]
pub struct FoodLogStore {
    path: PathBuf,
}

impl FoodLogStore {
    /// Store backed by the file at `path`; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole log
    ///
    /// A missing file is an empty log.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the file exists but is not a valid food log,
    /// or `StorageError` if it cannot be read
    pub fn load(&self) -> AppResult<FoodLog> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Food log file absent, starting empty");
            return Ok(FoodLog::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        let headers = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        if let Some(missing) = COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(AppError::invalid_format(format!(
                "{}: missing column '{missing}'",
                self.path.display()
            )));
        }

        let entries = reader
            .deserialize::<LogEntry>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.csv_error(e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Food log loaded");
        Ok(FoodLog::from(entries))
    }

    /// Rewrite the file from `log`
    ///
    /// # Errors
    /// Returns `StorageError` if the file cannot be created or written
    pub fn save(&self, log: &FoodLog) -> AppResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;

        writer.write_record(COLUMNS).map_err(|e| self.csv_error(e))?;
        for entry in log.entries() {
            writer.serialize(entry).map_err(|e| self.csv_error(e))?;
        }
        writer.flush()?;

        info!(path = %self.path.display(), entries = log.len(), "Food log saved");
        Ok(())
    }

    fn csv_error(&self, error: csv::Error) -> AppError {
        let message = format!("{}: {error}", self.path.display());
        if error.is_io_error() {
            AppError::storage(message).with_source(error)
        } else {
            AppError::invalid_format(message).with_source(error)
        }
    }
}
