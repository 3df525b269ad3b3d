//! Test utilities and fixtures for the statistics engine

use crate::app::models::{DriverSummary, FinishingPosition, Participation};
use crate::app::services::stats_engine::engine::LeagueData;


/// Summary fixture with the headline numbers used across engine tests
pub fn create_test_summary(name: &str, races: u32, podiums: u32, wins: u32) -> DriverSummary {
    DriverSummary {
        name: name.to_string(),
        races,
        titles: 0,
        constructor_titles: 0,
        podiums,
        wins,
        seconds: 0,
        thirds: 0,
        poles: 5,
        fast_laps: 0,
        top_tens: 0,
        retirements: 0,
        disqualifications: 0,
        debut: "2019".to_string(),
        last_race: "2024".to_string(),
    }
}

/// Participation fixture at a circuit with a position and optional flags
pub fn create_test_race(
    driver: &str,
    circuit: &str,
    position: &str,
    hat_trick: bool,
) -> Participation {
    Participation {
        driver: driver.to_string(),
        circuit: circuit.to_string(),
        league: "GRL".to_string(),
        season: "Temporada 7".to_string(),
        category: "F1".to_string(),
        year: "2023".to_string(),
        position: FinishingPosition::parse(position),
        pole: hat_trick,
        best_lap: hat_trick,
        hat_trick,
        grand_chelem: false,
        driver_champion: false,
        constructors_champion: false,
        team: "Equipe Azul".to_string(),
        broadcast_links: Vec::new(),
    }
}

/// A small league: three drivers, one of them with a rich career
pub fn create_test_league() -> LeagueData {
    let summaries = vec![
        create_test_summary("Ayrton", 50, 20, 10),
        create_test_summary("Nelson", 30, 8, 3),
        create_test_summary("Rubens", 12, 0, 0),
    ];

    let participations = vec![
        create_test_race("Ayrton", "Interlagos", "1", true),
        create_test_race("Ayrton", "Interlagos 2", "1", false),
        create_test_race("Ayrton", "Interlagos", "1", true),
        create_test_race("Ayrton", "Spa", "DNF", false),
        create_test_race("Ayrton", "Spa", "2", false),
        create_test_race("Nelson", "Monza", "1", false),
        create_test_race("Nelson", "Monza", "4", false),
        create_test_race("Rubens", "Monza", "11", false),
    ];

    LeagueData {
        summaries,
        participations,
    }
}
