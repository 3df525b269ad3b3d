//! Per-circuit career totals
//!
//! Groups a driver's participations by normalized circuit name. Suffix
//! variants of one venue ("Interlagos 2", "Interlagos II") tally together.

use crate::app::models::Participation;
use crate::app::services::sheet_parser::field_parsers::normalize_circuit_name;
use serde::Serialize;

/// Career totals at one circuit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitGroup {
    /// Normalized circuit name
    pub circuit: String,

    /// Race starts there
    pub starts: u32,

    /// Wins
    pub wins: u32,

    /// Podium finishes
    pub podiums: u32,

    /// Pole positions
    pub poles: u32,

    /// Fastest laps
    pub fast_laps: u32,

    /// Hat-tricks
    pub hat_tricks: u32,

    /// Grand chelems
    pub grand_chelems: u32,

    /// Best (lowest) classified finishing position achieved there
    pub best_position: Option<u32>,
}

/// Group participations by circuit, most starts first, names tie-broken
pub fn group_by_circuit(participations: &[&Participation]) -> Vec<CircuitGroup> {
    let mut circuits: Vec<CircuitGroup> = Vec::new();

    for participation in participations {
        let name = normalize_circuit_name(&participation.circuit);

        let index = match circuits.iter().position(|c| c.circuit == name) {
            Some(index) => index,
            None => {
                circuits.push(CircuitGroup {
                    circuit: name,
                    starts: 0,
                    wins: 0,
                    podiums: 0,
                    poles: 0,
                    fast_laps: 0,
                    hat_tricks: 0,
                    grand_chelems: 0,
                    best_position: None,
                });
                circuits.len() - 1
            }
        };
        let group = &mut circuits[index];

        group.starts += 1;
        if participation.position.is_win() {
            group.wins += 1;
        }
        if participation.position.is_podium() {
            group.podiums += 1;
        }
        if participation.pole {
            group.poles += 1;
        }
        if participation.best_lap {
            group.fast_laps += 1;
        }
        if participation.hat_trick {
            group.hat_tricks += 1;
        }
        if participation.grand_chelem {
            group.grand_chelems += 1;
        }
        if let Some(position) = participation.position.as_number() {
            group.best_position = Some(match group.best_position {
                Some(best) => best.min(position),
                None => position,
            });
        }
    }

    circuits.sort_by(|a, b| {
        b.starts
            .cmp(&a.starts)
            .then_with(|| a.circuit.cmp(&b.circuit))
    });

    circuits
}
