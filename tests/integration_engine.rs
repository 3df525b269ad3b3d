//! End-to-end integration tests: sheet text in, driver report out
//!
//! These tests exercise the full pipeline — parser, normalizer, engine,
//! groupings — over realistic sheet content, without touching the
//! filesystem.

use grip_stats::app::services::sheet_parser::parser::{
    parse_participation_sheet, parse_summary_sheet,
};
use grip_stats::app::services::stats_engine::engine::LeagueData;
use grip_stats::StatsEngine;

const SUMMARY_SHEET: &str = "\
Piloto,Corridas,Títulos,Construtores,Pódios,P1,P2,P3,Poles,Fast Laps,Top 10,Abandonos,DQ,Estreia,Ultima
Ayrton,50,3,2,20,10,6,4,5,7,40,4,1,2019,2024
Nelson,30,1,0,8,3,3,2,2,1,22,6,0,2020,2024
Rubens,12,0,0,0,0,0,0,0,0,7,3,0,2022,2023
";

const PARTICIPATION_SHEET: &str = "\
Piloto,Pista,Liga,Temporada,Categoria,Ano,Final,Pole,Best Lap,Hat-Trick,Chelem,Piloto Campeao,Construtores,Equipe,Link Transmissao
Ayrton,Interlagos,GRL,Temporada 7,F1,2023,1,SIM,SIM,SIM,,,,Equipe Azul,https://vod.example/1
Ayrton,Interlagos 2,GRL,Temporada 7,F1,2023,1,,,,,,,Equipe Azul,
Ayrton,Interlagos,GRL,Temporada 7,F1,2023,1,SIM,SIM,SIM,,SIM,TIME,Equipe Azul,
,,,,,,,,,,,,,,
Ayrton,Spa,GRL,Temporada 8,F1,2024,DNF,,,,,,,Equipe Azul,
Nelson,Monza,GRL,Temporada 7,F1,2023,1,,,,,,,Equipe Verde,
Nelson,Monza II,GRL,Temporada 8,F1,2024,4,,,,,,,Equipe Verde,
Rubens,Imola,GRL,Temporada 8,F1,2024,11,,,,,,,Equipe Roxa,
";

fn build_engine() -> StatsEngine {
    let summaries = parse_summary_sheet(SUMMARY_SHEET, "pilotos.csv").unwrap();
    let participations =
        parse_participation_sheet(PARTICIPATION_SHEET, "corridas.csv").unwrap();

    StatsEngine::new(LeagueData {
        summaries: summaries.records,
        participations: participations.records,
    })
}

#[test]
fn end_to_end_driver_report() {
    let engine = build_engine();
    let report = engine.driver_report("ayrton").unwrap();

    // Headline numbers come from the summary sheet
    assert_eq!(report.summary.races, 50);
    assert_eq!(report.rates.podium_rate, Some(40.0));
    assert_eq!(report.rates.win_rate, Some(20.0));

    // Hat-tricks are participation-derived
    assert_eq!(report.derived.hat_tricks, 2);

    // Three consecutive wins at Interlagos variants
    assert_eq!(report.streaks.win_streak, 3);
    assert_eq!(report.dominant_circuits.len(), 1);
    assert_eq!(report.dominant_circuits[0].circuit, "Interlagos");
    assert_eq!(report.dominant_circuits[0].wins, 3);
}

#[test]
fn end_to_end_groupings() {
    let engine = build_engine();
    let report = engine.driver_report("Ayrton").unwrap();

    // Separator row is gone: circuit starts sum to the valid record count
    let starts: u32 = report.circuits.iter().map(|c| c.starts).sum();
    assert_eq!(starts, 4);

    // Years are listed most recent first
    assert_eq!(report.seasons.len(), 2);
    assert_eq!(report.seasons[0].year, "2024");
    assert_eq!(report.seasons[1].year, "2023");
    assert_eq!(report.seasons[1].seasons[0].driver_titles, 1);
    assert_eq!(report.seasons[1].seasons[0].constructor_titles, 1);

    // One league, two championships, most recent first
    assert_eq!(report.leagues.len(), 1);
    let league = &report.leagues[0];
    assert_eq!(league.championships.len(), 2);
    assert_eq!(league.championships[0].season, "Temporada 8");
    assert!(league.championships[1].driver_champion);
    assert_eq!(league.driver_titles, 1);

    // Milestones in chronological order
    let milestones = &report.milestones;
    assert_eq!(milestones.first_race.as_ref().unwrap().year, "2023");
    assert_eq!(milestones.first_hat_trick.as_ref().unwrap().circuit, "Interlagos");
    assert!(milestones.first_grand_chelem.is_none());
}

#[test]
fn end_to_end_rankings_with_ties() {
    let engine = build_engine();

    // Synthetic three-way tie at the top of a statistic
    let entries = vec![
        ("Ayrton".to_string(), 7u32),
        ("Nelson".to_string(), 7),
        ("Rubens".to_string(), 7),
        ("Novato".to_string(), 2),
    ];
    let table = grip_stats::app::services::stats_engine::top_n_with_ties(entries, None);
    assert!(table[..3].iter().all(|e| e.rank == 1));
    assert_eq!(table[3].rank, 4);

    // Zero values never rank
    let rubens = engine.driver_report("Rubens").unwrap();
    assert!(!rubens.rankings.wins.is_ranked());
    assert_eq!(rubens.rankings.wins.display_value(), 999);
}

#[test]
fn empty_and_header_only_sheets_yield_empty_engine() {
    let summaries = parse_summary_sheet("Piloto,Corridas\n", "pilotos.csv").unwrap();
    let participations = parse_participation_sheet(
        "Piloto,Pista,Final\n",
        "corridas.csv",
    )
    .unwrap();

    let engine = StatsEngine::new(LeagueData {
        summaries: summaries.records,
        participations: participations.records,
    });

    assert!(engine.summaries().is_empty());
    assert!(engine.participations().is_empty());
    assert!(engine.driver_report("Ayrton").is_none());
    assert!(engine.league_table(|s| s.wins, Some(10)).is_empty());
}

#[test]
fn position_display_round_trip() {
    use grip_stats::FinishingPosition;

    assert_eq!(FinishingPosition::parse("3").to_string(), "3º");
    assert_eq!(FinishingPosition::parse("DNF").to_string(), "DNF");
}
