//! Serializable view-models for driver reports
//!
//! Everything the presentation layer renders comes out of these structures;
//! it never recomputes an aggregate. All fields serialize to JSON for the
//! machine-readable output format.

use crate::app::models::{DriverSummary, Rank};
use crate::app::services::grouping::{CircuitGroup, LeagueGroup, Milestones, YearGroup};
use crate::app::services::stats_engine::records::CircuitDominance;
use serde::Serialize;

/// Statistics derived from participations because the summary sheet lacks
/// them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedStats {
    /// Hat-tricks (pole + win + fastest lap)
    pub hat_tricks: u32,

    /// Grand chelems (hat-trick + led every lap)
    pub grand_chelems: u32,
}

/// Rate statistics over the driver's race count
///
/// `None` means not applicable (zero races); rendering turns it into "-".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateStats {
    pub podium_rate: Option<f64>,
    pub win_rate: Option<f64>,
    pub top_ten_rate: Option<f64>,
    pub retirement_rate: Option<f64>,
}

/// Efficiency statistics: races needed per achievement
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EfficiencyStats {
    pub races_per_podium: Option<f64>,
    pub races_per_win: Option<f64>,
}

/// Longest consecutive runs in sheet order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreakStats {
    pub podium_streak: u32,
    pub win_streak: u32,
}

/// Global rankings of the driver against the whole league
#[derive(Debug, Clone, Serialize)]
pub struct RankingTable {
    pub races: Rank,
    pub wins: Rank,
    pub podiums: Rank,
    pub poles: Rank,
    pub fast_laps: Rank,
    pub top_tens: Rank,
    /// Combined statistic: individual + constructors titles
    pub titles: Rank,
    /// Participation-derived statistic
    pub hat_tricks: Rank,
    /// Participation-derived statistic
    pub grand_chelems: Rank,
}

/// The complete per-driver report served to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    /// Headline totals from the summary sheet
    pub summary: DriverSummary,

    /// Participation-derived counts
    pub derived: DerivedStats,

    /// Rate statistics
    pub rates: RateStats,

    /// Efficiency statistics
    pub efficiency: EfficiencyStats,

    /// Streaks in sheet order
    pub streaks: StreakStats,

    /// Global rankings
    pub rankings: RankingTable,

    /// Best classified finishing position across all participations
    pub best_position: Option<u32>,

    /// Circuits dominated (most wins, at or above the threshold)
    pub dominant_circuits: Vec<CircuitDominance>,

    /// Year → season hierarchy
    pub seasons: Vec<YearGroup>,

    /// League → championship hierarchy
    pub leagues: Vec<LeagueGroup>,

    /// Per-circuit career totals
    pub circuits: Vec<CircuitGroup>,

    /// Career milestones
    pub milestones: Milestones,
}
