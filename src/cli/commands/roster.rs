//! The roster command: league table for one statistic

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::{OutputFormat, RosterArgs};
use crate::Result;

/// One row of the JSON roster output
#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    rank: u32,
    driver: &'a str,
    value: u32,
}

/// Execute the roster command
pub async fn run(args: RosterArgs) -> Result<()> {
    let engine = super::build_engine(&args.data).await?;

    let stat = args.stat;
    let table = engine.league_table(|summary| stat.value_of(summary), args.top);

    match args.format {
        OutputFormat::Json => {
            let rows: Vec<RosterRow> = table
                .iter()
                .map(|entry| RosterRow {
                    rank: entry.rank,
                    driver: &entry.item.name,
                    value: entry.value,
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).map_err(|e| {
                    crate::Error::data_validation(format!("Failed to serialize roster: {}", e))
                })?
            );
        }
        OutputFormat::Text => {
            println!();
            println!("{:<6} {:<24} {}", "Rank".bold(), "Driver".bold(), stat.label().bold());
            for entry in &table {
                println!("#{:<5} {:<24} {}", entry.rank, entry.item.name, entry.value);
            }
            if table.is_empty() {
                println!("{}", "No drivers with a non-zero value".dimmed());
            }
            println!();
        }
    }

    Ok(())
}
