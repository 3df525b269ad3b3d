//! Data models for Grip Racing league statistics
//!
//! This module contains the core data structures for representing driver
//! career summaries and per-race participation records, as published in the
//! league's CSV sheets.

use crate::constants::{self, PODIUM_CUTOFF, TOP_TEN_CUTOFF, UNRANKED};
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Finishing Position
// =============================================================================

/// Finishing position of one race entry
///
/// The sheets mix numeric positions ("3", "3º", "P3") with free-text labels
/// ("DNF", "DQ", "ABANDONOU") and empty cells. Rather than a numeric
/// sentinel, the distinction is explicit; conversion to display text happens
/// only at the presentation boundary via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FinishingPosition {
    /// Classified with a real finishing position (always >= 1)
    Classified(u32),

    /// Non-numeric label, preserved verbatim (retirements, disqualifications)
    Label(String),

    /// Empty or absent cell
    Absent,
}

impl FinishingPosition {
    /// Parse a raw sheet cell into a finishing position
    ///
    /// All non-digit characters are stripped before the numeric parse, so
    /// "3º" and "P3" both classify as position 3. A digitless or zero value
    /// falls back to the verbatim label, or `Absent` for an empty cell.
    /// Never fails.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Absent;
        }

        let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Self::Classified(n),
            _ => Self::Label(trimmed.to_string()),
        }
    }

    /// Numeric position, if classified
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::Classified(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether the cell carried any value at all
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Position 1
    pub fn is_win(&self) -> bool {
        self.as_number() == Some(1)
    }

    /// Position 1, 2, or 3
    pub fn is_podium(&self) -> bool {
        self.as_number().is_some_and(|n| n <= PODIUM_CUTOFF)
    }

    /// Position 1 through 10
    pub fn is_top_ten(&self) -> bool {
        self.as_number().is_some_and(|n| n <= TOP_TEN_CUTOFF)
    }

    /// Whether the label marks a retirement or disqualification
    pub fn is_retirement(&self) -> bool {
        match self {
            Self::Label(label) => constants::is_retirement_label(label),
            _ => false,
        }
    }
}

impl fmt::Display for FinishingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified(n) => write!(f, "{}º", n),
            Self::Label(label) => write!(f, "{}", label),
            Self::Absent => write!(f, "-"),
        }
    }
}

// =============================================================================
// Participation Record
// =============================================================================

/// One race entry for one driver, as parsed from the participation sheet
///
/// Records are immutable after parsing; every aggregate is recomputed from
/// the full record set rather than mutated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    /// Driver name as written in the sheet
    pub driver: String,

    /// Circuit name as written in the sheet (un-normalized)
    pub circuit: String,

    /// League the race belongs to
    pub league: String,

    /// Season label within the league (free text, e.g. "Temporada 7")
    pub season: String,

    /// Category raced (e.g. "F1", "GT3")
    pub category: String,

    /// Year label (kept verbatim; parsed on demand for sorting)
    pub year: String,

    /// Finishing position
    pub position: FinishingPosition,

    /// Started from first grid position
    pub pole: bool,

    /// Recorded the fastest lap of the race
    pub best_lap: bool,

    /// Pole + win + fastest lap in the same race
    pub hat_trick: bool,

    /// Hat-trick plus leading every lap
    pub grand_chelem: bool,

    /// Row carries the driver-championship flag for this (league, season,
    /// category)
    pub driver_champion: bool,

    /// Row carries the constructors-championship flag
    pub constructors_champion: bool,

    /// Team entered with
    pub team: String,

    /// Broadcast links for the race
    pub broadcast_links: Vec<String>,
}

impl Participation {
    /// A record is valid iff at least one of driver, circuit, or finishing
    /// position is present. Sheets use fully empty rows as visual
    /// separators; those must never reach an aggregate.
    pub fn is_valid(&self) -> bool {
        !self.driver.trim().is_empty()
            || !self.circuit.trim().is_empty()
            || self.position.is_present()
    }

    /// Year label parsed as a number, where possible
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse::<i32>().ok()
    }

    /// Championship identity for this entry: (league, season, category)
    pub fn championship_key(&self) -> (&str, &str, &str) {
        (&self.league, &self.season, &self.category)
    }
}

// =============================================================================
// Driver Summary
// =============================================================================

/// Per-driver career totals from the summary sheet
///
/// These are the authoritative headline numbers. Statistics the summary
/// sheet lacks (hat-tricks, grand chelems) are derived from participations
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSummary {
    /// Driver name (lookups are case-insensitive exact matches)
    pub name: String,

    /// Career race starts
    pub races: u32,

    /// Individual championship titles
    pub titles: u32,

    /// Constructors championship titles
    pub constructor_titles: u32,

    /// Career podiums
    pub podiums: u32,

    /// First places
    pub wins: u32,

    /// Second places
    pub seconds: u32,

    /// Third places
    pub thirds: u32,

    /// Pole positions
    pub poles: u32,

    /// Fastest laps
    pub fast_laps: u32,

    /// Top-10 finishes
    pub top_tens: u32,

    /// Retirements
    pub retirements: u32,

    /// Disqualifications
    pub disqualifications: u32,

    /// Debut label (verbatim from the sheet)
    pub debut: String,

    /// Most recent race label (verbatim from the sheet)
    pub last_race: String,
}

impl DriverSummary {
    /// Individual + constructors titles, the combined-title statistic
    pub fn titles_total(&self) -> u32 {
        self.titles + self.constructor_titles
    }
}

// =============================================================================
// Competition Rank
// =============================================================================

/// Result of ranking one driver's statistic against the league
///
/// `None` means the driver has zero occurrences of the statistic and is not
/// ranked at all. The legacy 999 sentinel survives only in display and JSON
/// output (`constants::UNRANKED`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank(Option<u32>);

impl Rank {
    /// A real rank (1-based)
    pub fn ranked(position: u32) -> Self {
        Self(Some(position))
    }

    /// Not applicable: the driver has a zero value for the statistic
    pub fn unranked() -> Self {
        Self(None)
    }

    /// The rank, if applicable
    pub fn value(&self) -> Option<u32> {
        self.0
    }

    /// Whether the driver is ranked
    pub fn is_ranked(&self) -> bool {
        self.0.is_some()
    }

    /// Presentation value: the rank, or the unranked sentinel
    pub fn display_value(&self) -> u32 {
        self.0.unwrap_or(UNRANKED)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(position) => write!(f, "#{}", position),
            None => write!(f, "-"),
        }
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.display_value())
    }
}
