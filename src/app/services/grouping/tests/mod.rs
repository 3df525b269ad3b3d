//! Test utilities and fixtures for grouping tests

use crate::app::models::{FinishingPosition, Participation};

mod circuits_tests;

/// Builder-style fixture for one participation row
pub struct RaceSpec {
    pub circuit: &'static str,
    pub league: &'static str,
    pub season: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub position: &'static str,
    pub pole: bool,
    pub best_lap: bool,
    pub hat_trick: bool,
    pub grand_chelem: bool,
    pub driver_champion: bool,
    pub constructors_champion: bool,
}

impl Default for RaceSpec {
    fn default() -> Self {
        Self {
            circuit: "Interlagos",
            league: "GRL",
            season: "Temporada 7",
            category: "F1",
            year: "2023",
            position: "5",
            pole: false,
            best_lap: false,
            hat_trick: false,
            grand_chelem: false,
            driver_champion: false,
            constructors_champion: false,
        }
    }
}

pub fn race(spec: RaceSpec) -> Participation {
    Participation {
        driver: "Ayrton".to_string(),
        circuit: spec.circuit.to_string(),
        league: spec.league.to_string(),
        season: spec.season.to_string(),
        category: spec.category.to_string(),
        year: spec.year.to_string(),
        position: FinishingPosition::parse(spec.position),
        pole: spec.pole,
        best_lap: spec.best_lap,
        hat_trick: spec.hat_trick,
        grand_chelem: spec.grand_chelem,
        driver_champion: spec.driver_champion,
        constructors_champion: spec.constructors_champion,
        team: "Equipe Azul".to_string(),
        broadcast_links: Vec::new(),
    }
}
