//! Individual row parsing for the league sheets
//!
//! Converts one raw CSV row into a typed record, using the resolved column
//! map for alias-aware access and the field parsers for value coercion.
//! Row conversion never fails; separator rows are filtered by the caller
//! through the validity invariant.

use csv::StringRecord;

use super::column_mapping::{ColumnMap, ParticipationField, SummaryField};
use super::field_parsers::{parse_constructors_flag, parse_count, parse_flag, parse_links};
use crate::app::models::{DriverSummary, FinishingPosition, Participation};

/// Parse a single participation row
pub fn parse_participation_row(
    record: &StringRecord,
    mapping: &ColumnMap<ParticipationField>,
) -> Participation {
    use ParticipationField::*;

    Participation {
        driver: mapping.value_of(record, Driver).to_string(),
        circuit: mapping.value_of(record, Circuit).to_string(),
        league: mapping.value_of(record, League).to_string(),
        season: mapping.value_of(record, Season).to_string(),
        category: mapping.value_of(record, Category).to_string(),
        year: mapping.value_of(record, Year).to_string(),
        position: FinishingPosition::parse(mapping.value_of(record, Position)),
        pole: parse_flag(mapping.value_of(record, Pole)),
        best_lap: parse_flag(mapping.value_of(record, BestLap)),
        hat_trick: parse_flag(mapping.value_of(record, HatTrick)),
        grand_chelem: parse_flag(mapping.value_of(record, Chelem)),
        driver_champion: parse_flag(mapping.value_of(record, DriverChampion)),
        constructors_champion: parse_constructors_flag(mapping.value_of(record, Constructors)),
        team: mapping.value_of(record, Team).to_string(),
        broadcast_links: parse_links(mapping.value_of(record, BroadcastLinks)),
    }
}

/// Parse a single driver-summary row
pub fn parse_summary_row(
    record: &StringRecord,
    mapping: &ColumnMap<SummaryField>,
) -> DriverSummary {
    use SummaryField::*;

    DriverSummary {
        name: mapping.value_of(record, Driver).to_string(),
        races: parse_count(mapping.value_of(record, Races)),
        titles: parse_count(mapping.value_of(record, Titles)),
        constructor_titles: parse_count(mapping.value_of(record, ConstructorTitles)),
        podiums: parse_count(mapping.value_of(record, Podiums)),
        wins: parse_count(mapping.value_of(record, Wins)),
        seconds: parse_count(mapping.value_of(record, Seconds)),
        thirds: parse_count(mapping.value_of(record, Thirds)),
        poles: parse_count(mapping.value_of(record, Poles)),
        fast_laps: parse_count(mapping.value_of(record, FastLaps)),
        top_tens: parse_count(mapping.value_of(record, TopTens)),
        retirements: parse_count(mapping.value_of(record, Retirements)),
        disqualifications: parse_count(mapping.value_of(record, Disqualifications)),
        debut: mapping.value_of(record, Debut).to_string(),
        last_race: mapping.value_of(record, LastRace).to_string(),
    }
}
