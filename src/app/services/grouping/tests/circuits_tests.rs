//! Tests for per-circuit grouping

use super::{race, RaceSpec};
use crate::app::services::grouping::circuits::group_by_circuit;

#[test]
fn test_circuit_variants_merge() {
    let races = vec![
        race(RaceSpec { circuit: "Interlagos", position: "1", ..Default::default() }),
        race(RaceSpec { circuit: "Interlagos 2", position: "3", best_lap: true, ..Default::default() }),
        race(RaceSpec { circuit: "Interlagos II", position: "DNF", ..Default::default() }),
        race(RaceSpec { circuit: "Monza", position: "2", pole: true, ..Default::default() }),
    ];
    let refs: Vec<_> = races.iter().collect();

    let circuits = group_by_circuit(&refs);
    assert_eq!(circuits.len(), 2);

    // Most starts first
    let interlagos = &circuits[0];
    assert_eq!(interlagos.circuit, "Interlagos");
    assert_eq!(interlagos.starts, 3);
    assert_eq!(interlagos.wins, 1);
    assert_eq!(interlagos.podiums, 2);
    assert_eq!(interlagos.fast_laps, 1);
    assert_eq!(interlagos.best_position, Some(1));

    let monza = &circuits[1];
    assert_eq!(monza.starts, 1);
    assert_eq!(monza.poles, 1);
    assert_eq!(monza.best_position, Some(2));
}

#[test]
fn test_starts_sum_to_participation_count() {
    let races = vec![
        race(RaceSpec { circuit: "Spa", ..Default::default() }),
        race(RaceSpec { circuit: "Spa 2", ..Default::default() }),
        race(RaceSpec { circuit: "Monza", ..Default::default() }),
        race(RaceSpec { circuit: "Imola", position: "DNF", ..Default::default() }),
    ];
    let refs: Vec<_> = races.iter().collect();

    let circuits = group_by_circuit(&refs);
    let total_starts: u32 = circuits.iter().map(|c| c.starts).sum();
    assert_eq!(total_starts as usize, races.len());
}

#[test]
fn test_ties_break_by_name() {
    let races = vec![
        race(RaceSpec { circuit: "Spa", ..Default::default() }),
        race(RaceSpec { circuit: "Monza", ..Default::default() }),
    ];
    let refs: Vec<_> = races.iter().collect();

    let circuits = group_by_circuit(&refs);
    assert_eq!(circuits[0].circuit, "Monza");
    assert_eq!(circuits[1].circuit, "Spa");
}

#[test]
fn test_no_best_position_without_classification() {
    let races = vec![race(RaceSpec { circuit: "Spa", position: "DNF", ..Default::default() })];
    let refs: Vec<_> = races.iter().collect();

    let circuits = group_by_circuit(&refs);
    assert_eq!(circuits[0].best_position, None);
}
