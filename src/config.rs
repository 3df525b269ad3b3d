//! Configuration management and validation.
//!
//! Provides the configuration structure describing where the two league
//! sheets live and how long a load may take before it is abandoned.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default load timeout in seconds
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 30;

/// Configuration for a grip_stats run
///
/// The engine consumes exactly two datasets: the per-driver summary sheet
/// and the per-race participation sheet. Both must be present — rendering
/// never observes a partially loaded pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the driver-summary CSV (one row per driver)
    pub summaries_path: PathBuf,

    /// Path to the participation CSV (one row per driver per race)
    pub participations_path: PathBuf,

    /// Maximum wall-clock time for loading both sheets, in seconds
    pub load_timeout_secs: u64,
}

impl Config {
    /// Create a configuration from the two sheet paths with default timeout
    pub fn new(summaries_path: PathBuf, participations_path: PathBuf) -> Self {
        Self {
            summaries_path,
            participations_path,
            load_timeout_secs: DEFAULT_LOAD_TIMEOUT_SECS,
        }
    }

    /// Load timeout as a `Duration`
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.summaries_path.as_os_str().is_empty() {
            return Err(Error::configuration("Summaries path cannot be empty"));
        }

        if self.participations_path.as_os_str().is_empty() {
            return Err(Error::configuration("Participations path cannot be empty"));
        }

        if self.summaries_path == self.participations_path {
            return Err(Error::configuration(
                "Summaries and participations must be distinct sheets",
            ));
        }

        if self.load_timeout_secs == 0 {
            return Err(Error::configuration("Load timeout must be non-zero"));
        }

        Ok(())
    }
}
