//! Command-line argument definitions for grip-stats
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Both subcommands consume the same two league sheets.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::models::DriverSummary;
use crate::config::Config;

/// CLI arguments for the Grip Racing statistics engine
///
/// Aggregates the league's driver-summary and race-participation sheets
/// into driver reports and league tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "grip-stats",
    version,
    about = "Driver statistics, rankings, and career reports for the Grip Racing league",
    long_about = "Loads the league's two published CSV sheets (per-driver career summaries and \
                  per-race participation records) and derives driver reports: rates, streaks, \
                  global rankings, milestones, and groupings by season, championship, and circuit."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Full statistics report for one driver
    Report(ReportArgs),
    /// League table for one statistic, ties kept at the cut line
    Roster(RosterArgs),
}

/// Shared dataset location arguments
#[derive(Debug, Clone, Parser)]
pub struct DataArgs {
    /// Path to the driver-summary sheet (one row per driver)
    #[arg(short = 's', long = "summaries", value_name = "CSV")]
    pub summaries: PathBuf,

    /// Path to the participation sheet (one row per driver per race)
    #[arg(short = 'p', long = "participations", value_name = "CSV")]
    pub participations: PathBuf,

    /// Maximum seconds to wait for both sheets to load
    #[arg(long = "timeout", value_name = "SECS", default_value_t = crate::config::DEFAULT_LOAD_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl DataArgs {
    /// Build the engine configuration from the CLI arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::new(self.summaries.clone(), self.participations.clone());
        config.load_timeout_secs = self.timeout_secs;
        config
    }
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Driver name (case-insensitive exact match)
    #[arg(short = 'd', long = "driver", value_name = "NAME")]
    pub driver: String,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the roster command
#[derive(Debug, Clone, Parser)]
pub struct RosterArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Statistic to rank the league by
    #[arg(long = "stat", value_enum, default_value_t = RosterStat::Wins)]
    pub stat: RosterStat,

    /// Keep only the first N ranks (ties at the cut line are kept)
    #[arg(short = 't', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Statistics the roster can rank by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RosterStat {
    Races,
    Wins,
    Podiums,
    Poles,
    Titles,
}

impl RosterStat {
    /// Summary accessor for the statistic
    pub fn value_of(self, summary: &DriverSummary) -> u32 {
        match self {
            Self::Races => summary.races,
            Self::Wins => summary.wins,
            Self::Podiums => summary.podiums,
            Self::Poles => summary.poles,
            Self::Titles => summary.titles_total(),
        }
    }

    /// Column title for text output
    pub fn label(self) -> &'static str {
        match self {
            Self::Races => "Races",
            Self::Wins => "Wins",
            Self::Podiums => "Podiums",
            Self::Poles => "Poles",
            Self::Titles => "Titles",
        }
    }
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
