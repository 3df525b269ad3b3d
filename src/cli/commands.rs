//! Command implementations for the grip-stats CLI
//!
//! This module wires argument parsing to the engine: logging setup, dataset
//! loading, command dispatch, and error handling for the CLI boundary.

pub mod report;
pub mod roster;

use tracing::debug;

use crate::app::services::dataset_loader::load_league_data;
use crate::app::services::stats_engine::StatsEngine;
use crate::cli::args::{Args, Commands, DataArgs};
use crate::{Error, Result};

/// Run the selected command
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    match args.command {
        Some(Commands::Report(report_args)) => report::run(report_args).await,
        Some(Commands::Roster(roster_args)) => roster::run(roster_args).await,
        None => {
            // Clap handles --help/--version; a bare invocation gets usage
            Err(Error::configuration(
                "No command given; try 'grip-stats report --help'",
            ))
        }
    }
}

/// Load both sheets and build the engine
pub(crate) async fn build_engine(data_args: &DataArgs) -> Result<StatsEngine> {
    let config = data_args.to_config();
    let data = load_league_data(&config).await?;
    Ok(StatsEngine::new(data))
}

/// Set up structured logging based on CLI verbosity
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grip_stats={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
