//! Concurrent loading of the two league sheets
//!
//! The summary and participation files are read concurrently and parsed
//! into one [`LeagueData`] snapshot. The pair loads atomically from the
//! caller's point of view: any failure or timeout surfaces as
//! `DataUnavailable` and no partial pair ever escapes. Empty or header-only
//! sheets load successfully into empty datasets.

use std::path::Path;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::app::services::sheet_parser::parser::{
    parse_participation_sheet, parse_summary_sheet,
};
use crate::app::services::stats_engine::engine::LeagueData;
use crate::config::Config;
use crate::{Error, Result};

/// Load both league sheets described by the configuration
pub async fn load_league_data(config: &Config) -> Result<LeagueData> {
    config.validate()?;

    let loaded = timeout(
        config.load_timeout(),
        load_pair(&config.summaries_path, &config.participations_path),
    )
    .await
    .map_err(|_| {
        Error::data_unavailable(format!(
            "Loading league sheets timed out after {}s",
            config.load_timeout_secs
        ))
    })?;

    loaded
}

/// Read and parse both sheets concurrently
async fn load_pair(summaries_path: &Path, participations_path: &Path) -> Result<LeagueData> {
    let (summaries_text, participations_text) = tokio::try_join!(
        read_sheet(summaries_path),
        read_sheet(participations_path),
    )?;

    let summaries = parse_summary_sheet(&summaries_text, &sheet_name(summaries_path))?;
    let participations =
        parse_participation_sheet(&participations_text, &sheet_name(participations_path))?;

    if !participations.stats.errors.is_empty() {
        warn!(
            "{} participation rows skipped with errors",
            participations.stats.errors.len()
        );
    }

    info!(
        "League data loaded: {} drivers, {} participations",
        summaries.records.len(),
        participations.records.len()
    );

    Ok(LeagueData {
        summaries: summaries.records,
        participations: participations.records,
    })
}

/// Read one sheet file, mapping any I/O failure to `DataUnavailable`
async fn read_sheet(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::data_unavailable(format!("Failed to read sheet '{}': {}", path.display(), e))
    })
}

fn sheet_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
