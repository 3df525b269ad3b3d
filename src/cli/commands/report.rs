//! The report command: full statistics for one driver

use colored::Colorize;
use tracing::info;

use crate::app::models::FinishingPosition;
use crate::app::services::stats_engine::report::DriverReport;
use crate::app::services::stats_engine::rates::{format_percent, format_ratio};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::{Error, Result};

/// Execute the report command
pub async fn run(args: ReportArgs) -> Result<()> {
    let engine = super::build_engine(&args.data).await?;

    let report = engine
        .driver_report(&args.driver)
        .ok_or_else(|| Error::driver_not_found(&args.driver))?;

    info!("Report built for {}", report.summary.name);

    match args.format {
        OutputFormat::Json => print_json_report(&report),
        OutputFormat::Text => print_text_report(&report),
    }
}

fn print_json_report(report: &DriverReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::data_validation(format!("Failed to serialize report: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn print_text_report(report: &DriverReport) -> Result<()> {
    let summary = &report.summary;

    println!();
    println!("{}", summary.name.bold().underline());
    if !summary.debut.trim().is_empty() {
        println!(
            "{}",
            format!("Debut {} - last race {}", summary.debut, summary.last_race).dimmed()
        );
    }
    println!();

    println!("{}", "Career".bold());
    println!("  Races:          {}", summary.races);
    println!(
        "  Titles:         {} ({} driver, {} constructors)",
        summary.titles_total(),
        summary.titles,
        summary.constructor_titles
    );
    println!(
        "  Podiums:        {} ({} / {} / {})",
        summary.podiums, summary.wins, summary.seconds, summary.thirds
    );
    println!("  Poles:          {}", summary.poles);
    println!("  Fast laps:      {}", summary.fast_laps);
    println!("  Hat-tricks:     {}", report.derived.hat_tricks);
    println!("  Grand chelems:  {}", report.derived.grand_chelems);
    if let Some(best) = report.best_position {
        println!(
            "  Best finish:    {}",
            FinishingPosition::Classified(best).to_string().green()
        );
    }
    println!();

    println!("{}", "Rates".bold());
    println!(
        "  Podium rate:    {}",
        format_percent(report.rates.podium_rate)
    );
    println!("  Win rate:       {}", format_percent(report.rates.win_rate));
    println!(
        "  Top-10 rate:    {}",
        format_percent(report.rates.top_ten_rate)
    );
    println!(
        "  Retirement:     {}",
        format_percent(report.rates.retirement_rate)
    );
    println!(
        "  Races/podium:   {}",
        format_ratio(report.efficiency.races_per_podium)
    );
    println!(
        "  Races/win:      {}",
        format_ratio(report.efficiency.races_per_win)
    );
    println!(
        "  Podium streak:  {}   Win streak: {}",
        report.streaks.podium_streak, report.streaks.win_streak
    );
    println!();

    println!("{}", "League rankings".bold());
    println!("  Races:          {}", report.rankings.races);
    println!("  Wins:           {}", report.rankings.wins);
    println!("  Podiums:        {}", report.rankings.podiums);
    println!("  Poles:          {}", report.rankings.poles);
    println!("  Fast laps:      {}", report.rankings.fast_laps);
    println!("  Top 10s:        {}", report.rankings.top_tens);
    println!("  Titles:         {}", report.rankings.titles);
    println!("  Hat-tricks:     {}", report.rankings.hat_tricks);
    println!("  Grand chelems:  {}", report.rankings.grand_chelems);
    println!();

    if !report.dominant_circuits.is_empty() {
        let names: Vec<String> = report
            .dominant_circuits
            .iter()
            .map(|d| format!("{} ({} wins)", d.circuit, d.wins))
            .collect();
        println!("{} {}", "Dominates:".bold(), names.join(", ").yellow());
        println!();
    }

    println!("{}", "Seasons".bold());
    for year in &report.seasons {
        println!(
            "  {} - {} races, {} wins",
            year.year.bold(),
            year.total_races(),
            year.total_wins()
        );
        for season in &year.seasons {
            let mut titles = String::new();
            if season.driver_titles > 0 {
                titles.push_str(&format!("  {} driver title(s)", season.driver_titles));
            }
            if season.constructor_titles > 0 {
                titles.push_str(&format!(
                    "  {} constructors title(s)",
                    season.constructor_titles
                ));
            }
            println!(
                "    {}: {} races, {} wins, {} podiums, {} poles{}",
                season.season,
                season.races,
                season.wins,
                season.podiums,
                season.poles,
                titles.green()
            );
        }
    }
    println!();

    println!("{}", "Championships".bold());
    for league in &report.leagues {
        println!(
            "  {} - {} driver title(s), {} constructors title(s)",
            league.league.bold(),
            league.driver_titles,
            league.constructor_titles
        );
        for championship in &league.championships {
            let mut flags = Vec::new();
            if championship.driver_champion {
                flags.push("champion");
            }
            if championship.constructors_champion {
                flags.push("constructors");
            }
            let trophy = if flags.is_empty() {
                String::new()
            } else {
                format!("  [{}]", flags.join(", "))
            };
            println!(
                "    {} {} ({}): {} races{}",
                championship.season,
                championship.category,
                championship.year,
                championship.races,
                trophy.green()
            );
            for link in &championship.broadcast_links {
                println!("      {}", link.dimmed());
            }
        }
    }
    println!();

    println!("{}", "Circuits".bold());
    for circuit in &report.circuits {
        let best = circuit
            .best_position
            .map(|p| FinishingPosition::Classified(p).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<24} {} starts, {} wins, {} podiums, best {}",
            circuit.circuit, circuit.starts, circuit.wins, circuit.podiums, best
        );
    }
    println!();

    println!("{}", "Milestones".bold());
    print_milestone("First race", report.milestones.first_race.as_ref());
    print_milestone("First podium", report.milestones.first_podium.as_ref());
    print_milestone("First win", report.milestones.first_win.as_ref());
    print_milestone("First pole", report.milestones.first_pole.as_ref());
    print_milestone("First fast lap", report.milestones.first_fast_lap.as_ref());
    print_milestone("First hat-trick", report.milestones.first_hat_trick.as_ref());
    print_milestone(
        "First grand chelem",
        report.milestones.first_grand_chelem.as_ref(),
    );
    print_milestone(
        "First driver title",
        report.milestones.first_driver_title.as_ref(),
    );
    print_milestone(
        "First constructors title",
        report.milestones.first_constructors_title.as_ref(),
    );
    println!();

    Ok(())
}

fn print_milestone(label: &str, milestone: Option<&crate::app::services::grouping::Milestone>) {
    match milestone {
        Some(m) => println!(
            "  {:<26} {} ({}, {})",
            label, m.circuit, m.season, m.year
        ),
        None => println!("  {:<26} {}", label, "-".dimmed()),
    }
}
