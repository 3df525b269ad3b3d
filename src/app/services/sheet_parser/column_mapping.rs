//! Alias-aware column resolution for the league sheets
//!
//! Sheet exports spell their headers inconsistently ("Pódios", "Podios",
//! "podios"). Each logical field carries an ordered list of accepted
//! spellings; resolution happens once per sheet, and the rest of the engine
//! only ever addresses columns through the resolved map.

use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::hash::Hash;

/// A logical sheet field with an ordered list of accepted header spellings
pub trait SheetField: Copy + Eq + Hash + std::fmt::Debug + 'static {
    /// All fields of this sheet, in sheet order
    fn all() -> &'static [Self];

    /// Accepted header spellings, most canonical first
    fn aliases(self) -> &'static [&'static str];

    /// Fields that must resolve for the sheet to be usable at all
    fn required() -> &'static [Self];
}

/// Logical fields of the driver-summary sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    Driver,
    Races,
    Titles,
    ConstructorTitles,
    Podiums,
    Wins,
    Seconds,
    Thirds,
    Poles,
    FastLaps,
    TopTens,
    Retirements,
    Disqualifications,
    Debut,
    LastRace,
}

impl SheetField for SummaryField {
    fn all() -> &'static [Self] {
        &[
            Self::Driver,
            Self::Races,
            Self::Titles,
            Self::ConstructorTitles,
            Self::Podiums,
            Self::Wins,
            Self::Seconds,
            Self::Thirds,
            Self::Poles,
            Self::FastLaps,
            Self::TopTens,
            Self::Retirements,
            Self::Disqualifications,
            Self::Debut,
            Self::LastRace,
        ]
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Driver => &["Piloto", "piloto", "Driver"],
            Self::Races => &["Corridas", "corridas"],
            Self::Titles => &["Títulos", "Titulos", "titulos"],
            Self::ConstructorTitles => &["Construtores", "construtores"],
            Self::Podiums => &["Pódios", "Podios", "podios"],
            Self::Wins => &["P1", "p1", "Vitórias", "Vitorias"],
            Self::Seconds => &["P2", "p2"],
            Self::Thirds => &["P3", "p3"],
            Self::Poles => &["Poles", "poles", "Pole"],
            Self::FastLaps => &["Fast Laps", "Fast Lap", "fast laps"],
            Self::TopTens => &["Top 10", "Top10", "top 10"],
            Self::Retirements => &["Abandonos", "abandonos"],
            Self::Disqualifications => &["DQ", "dq"],
            Self::Debut => &["Estreia", "estreia"],
            Self::LastRace => &["Última", "Ultima", "ultima"],
        }
    }

    fn required() -> &'static [Self] {
        &[Self::Driver]
    }
}

/// Logical fields of the race-participation sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipationField {
    Driver,
    Circuit,
    League,
    Season,
    Category,
    Year,
    Position,
    Pole,
    BestLap,
    HatTrick,
    Chelem,
    DriverChampion,
    Constructors,
    Team,
    BroadcastLinks,
}

impl SheetField for ParticipationField {
    fn all() -> &'static [Self] {
        &[
            Self::Driver,
            Self::Circuit,
            Self::League,
            Self::Season,
            Self::Category,
            Self::Year,
            Self::Position,
            Self::Pole,
            Self::BestLap,
            Self::HatTrick,
            Self::Chelem,
            Self::DriverChampion,
            Self::Constructors,
            Self::Team,
            Self::BroadcastLinks,
        ]
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Driver => &["Piloto", "piloto", "Driver"],
            Self::Circuit => &["Pista", "pista", "Circuito"],
            Self::League => &["Liga", "liga"],
            Self::Season => &["Temporada", "temporada"],
            Self::Category => &["Categoria", "categoria"],
            Self::Year => &["Ano", "ano"],
            Self::Position => &["Final", "final", "Posição", "Posicao"],
            Self::Pole => &["Pole", "pole"],
            Self::BestLap => &["Best Lap", "best lap", "Fast Lap"],
            Self::HatTrick => &["Hat-Trick", "Hat Trick", "hat-trick"],
            Self::Chelem => &["Chelem", "chelem", "Grand Chelem"],
            Self::DriverChampion => &["Piloto Campeao", "Piloto Campeão", "Campeao"],
            Self::Constructors => &["Construtores", "construtores"],
            Self::Team => &["Equipe", "equipe", "Time"],
            Self::BroadcastLinks => &["Link Transmissao", "Link Transmissão", "Transmissao"],
        }
    }

    fn required() -> &'static [Self] {
        &[Self::Driver, Self::Circuit]
    }
}

/// Resolved column positions for one sheet
///
/// Each field maps to every column whose header matched one of its aliases,
/// in alias order. Lookups scan those columns and take the first non-empty
/// cell, preserving the source's alias-fallback behavior even when an export
/// carries duplicate columns.
#[derive(Debug, Clone)]
pub struct ColumnMap<F: SheetField> {
    columns: HashMap<F, Vec<usize>>,
}

impl<F: SheetField> ColumnMap<F> {
    /// Resolve sheet headers against the alias table
    ///
    /// Headers are matched verbatim after trimming (a leading BOM is the
    /// parser's job). Fails only when a required field has no matching
    /// column at all.
    pub fn analyze(headers: &StringRecord, sheet: &str) -> Result<Self> {
        let header_index: Vec<(String, usize)> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (header.trim().to_string(), index))
            .collect();

        let mut columns: HashMap<F, Vec<usize>> = HashMap::new();
        for &field in F::all() {
            let mut indices = Vec::new();
            for alias in field.aliases() {
                for (header, index) in &header_index {
                    if header == alias {
                        indices.push(*index);
                    }
                }
            }
            if !indices.is_empty() {
                columns.insert(field, indices);
            }
        }

        for &field in F::required() {
            if !columns.contains_key(&field) {
                return Err(Error::sheet_format(
                    sheet,
                    format!(
                        "No column matches required field {:?} (accepted: {:?})",
                        field,
                        field.aliases()
                    ),
                ));
            }
        }

        Ok(Self { columns })
    }

    /// First non-empty cell for a field, scanning its alias columns in order
    ///
    /// Missing columns and rows shorter than the header both yield the empty
    /// string; callers apply their own defaults.
    pub fn value_of<'a>(&self, record: &'a StringRecord, field: F) -> &'a str {
        let Some(indices) = self.columns.get(&field) else {
            return "";
        };

        for &index in indices {
            if let Some(value) = record.get(index) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return trimmed;
                }
            }
        }

        ""
    }

    /// Whether a field resolved to at least one column
    pub fn has_field(&self, field: F) -> bool {
        self.columns.contains_key(&field)
    }

    /// Number of resolved fields
    pub fn resolved_fields(&self) -> usize {
        self.columns.len()
    }
}
