//! Career records and superlatives
//!
//! Best finishing position and circuit dominance, both derived from a
//! driver's participation records.

use std::collections::HashMap;

use crate::app::models::Participation;
use crate::app::services::sheet_parser::field_parsers::normalize_circuit_name;
use crate::constants::MIN_DOMINANCE_WINS;
use serde::Serialize;

/// A circuit where the driver has accumulated a dominant win count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitDominance {
    /// Normalized circuit name
    pub circuit: String,

    /// Wins there
    pub wins: u32,
}

/// Minimum classified finishing position across the participations
///
/// Only real positions count: labels, absent cells, and anything that did
/// not classify are excluded.
pub fn best_finishing_position<'a>(
    participations: impl IntoIterator<Item = &'a Participation>,
) -> Option<u32> {
    participations
        .into_iter()
        .filter_map(|p| p.position.as_number())
        .min()
}

/// Circuits where the driver's win count reaches the dominance threshold
///
/// Wins are tallied per normalized circuit name; only the maximum count is
/// reported, and only when it reaches `MIN_DOMINANCE_WINS`. Every circuit
/// tied at the maximum is listed, sorted by name for stable output.
pub fn dominant_circuits<'a>(
    participations: impl IntoIterator<Item = &'a Participation>,
) -> Vec<CircuitDominance> {
    let mut wins_by_circuit: HashMap<String, u32> = HashMap::new();
    for participation in participations {
        if participation.position.is_win() {
            let circuit = normalize_circuit_name(&participation.circuit);
            if !circuit.is_empty() {
                *wins_by_circuit.entry(circuit).or_insert(0) += 1;
            }
        }
    }

    let Some(&max_wins) = wins_by_circuit.values().max() else {
        return Vec::new();
    };
    if max_wins < MIN_DOMINANCE_WINS {
        return Vec::new();
    }

    let mut dominated: Vec<CircuitDominance> = wins_by_circuit
        .into_iter()
        .filter(|(_, wins)| *wins == max_wins)
        .map(|(circuit, wins)| CircuitDominance { circuit, wins })
        .collect();
    dominated.sort_by(|a, b| a.circuit.cmp(&b.circuit));

    dominated
}
