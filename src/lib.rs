//! Grip Stats Library
//!
//! A Rust library for aggregating and ranking sim-racing statistics for the
//! Grip Racing league from its two published CSV sheets.
//!
//! This library provides tools for:
//! - Parsing the league's driver-summary and race-participation sheets with
//!   alias-aware header resolution (accented, unaccented, lower-case spellings)
//! - Normalizing raw rows into strongly-typed records
//! - Deriving per-driver aggregates: rates, efficiency, streaks, records
//! - Computing global competition rankings with tie handling
//! - Grouping participations by season, championship, and circuit
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset_loader;
        pub mod grouping;
        pub mod sheet_parser;
        pub mod stats_engine;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DriverSummary, FinishingPosition, Participation, Rank};
pub use app::services::stats_engine::StatsEngine;
pub use config::Config;

/// Result type alias for grip_stats
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for league data loading and aggregation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in sheet '{sheet}': {message}")]
    SheetParsing {
        sheet: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Sheet structure error (missing header, unresolvable columns)
    #[error("Sheet format error in '{sheet}': {message}")]
    SheetFormat { sheet: String, message: String },

    /// One or both source datasets could not be loaded
    #[error("League data unavailable: {message}")]
    DataUnavailable { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Requested driver has no summary record
    #[error("Driver not found: {name}")]
    DriverNotFound { name: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn sheet_parsing(
        sheet: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::SheetParsing {
            sheet: sheet.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a sheet format error
    pub fn sheet_format(sheet: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SheetFormat {
            sheet: sheet.into(),
            message: message.into(),
        }
    }

    /// Create a data unavailable error
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a driver not found error
    pub fn driver_not_found(name: impl Into<String>) -> Self {
        Self::DriverNotFound { name: name.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::SheetParsing {
            sheet: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
