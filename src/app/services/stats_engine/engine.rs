//! The statistics engine snapshot object
//!
//! One `StatsEngine` is built per loaded dataset pair and owns the
//! immutable record snapshot. Every aggregate is a pure read over it;
//! participation-derived tallies are computed on first use and memoized for
//! the engine's lifetime. This replaces the ambient caches of earlier
//! renditions with state scoped to one explicit object.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, info};

use super::rankings::{competition_rank, top_n_with_ties, RankedEntry};
use super::rates::{races_per, rate_percent};
use super::records::{best_finishing_position, dominant_circuits};
use super::report::{
    DerivedStats, DriverReport, EfficiencyStats, RankingTable, RateStats, StreakStats,
};
use super::streaks::{longest_podium_streak, longest_win_streak};
use crate::app::models::{DriverSummary, Participation, Rank};
use crate::app::services::grouping::{
    championships::group_by_championship, circuits::group_by_circuit,
    milestones::collect_milestones, seasons::group_by_year,
};

/// The loaded dataset pair, ready for aggregation
///
/// Rendering never observes a partial pair: the loader produces both
/// datasets or neither.
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    /// Per-driver career summaries
    pub summaries: Vec<DriverSummary>,

    /// Per-race participation records, in sheet order
    pub participations: Vec<Participation>,
}

/// Aggregation engine over one immutable league snapshot
#[derive(Debug)]
pub struct StatsEngine {
    summaries: Vec<DriverSummary>,
    participations: Vec<Participation>,

    // Tallies the summary sheet lacks, memoized per engine lifetime
    hat_trick_tally: OnceLock<HashMap<String, u32>>,
    grand_chelem_tally: OnceLock<HashMap<String, u32>>,
}

impl StatsEngine {
    /// Build an engine from a loaded dataset pair
    ///
    /// Separator rows are already dropped by the parser; the validity
    /// invariant is re-checked here so no caller can feed an aggregate an
    /// empty record.
    pub fn new(data: LeagueData) -> Self {
        let before = data.participations.len();
        let participations: Vec<Participation> = data
            .participations
            .into_iter()
            .filter(Participation::is_valid)
            .collect();
        if participations.len() < before {
            debug!(
                "Dropped {} invalid participation records",
                before - participations.len()
            );
        }

        info!(
            "Engine ready: {} drivers, {} participations",
            data.summaries.len(),
            participations.len()
        );

        Self {
            summaries: data.summaries,
            participations,
            hat_trick_tally: OnceLock::new(),
            grand_chelem_tally: OnceLock::new(),
        }
    }

    /// All driver summaries
    pub fn summaries(&self) -> &[DriverSummary] {
        &self.summaries
    }

    /// All valid participations, in sheet order
    pub fn participations(&self) -> &[Participation] {
        &self.participations
    }

    /// Find a driver's summary by case-insensitive exact name match
    pub fn find_driver(&self, name: &str) -> Option<&DriverSummary> {
        let needle = name.trim();
        self.summaries
            .iter()
            .find(|s| s.name.trim().eq_ignore_ascii_case(needle))
    }

    /// A driver's participations in sheet order
    pub fn participations_for(&self, name: &str) -> Vec<&Participation> {
        let needle = name.trim();
        self.participations
            .iter()
            .filter(|p| p.driver.trim().eq_ignore_ascii_case(needle))
            .collect()
    }

    /// Hat-trick count for a driver, tallied from participations
    pub fn hat_tricks_for(&self, name: &str) -> u32 {
        tally_value(self.hat_trick_tally(), name)
    }

    /// Grand chelem count for a driver, tallied from participations
    pub fn grand_chelems_for(&self, name: &str) -> u32 {
        tally_value(self.grand_chelem_tally(), name)
    }

    /// Rank a driver's summary statistic against the whole league
    pub fn rank_by(&self, value: u32, stat: impl Fn(&DriverSummary) -> u32) -> Rank {
        competition_rank(value, self.summaries.iter().map(stat))
    }

    /// League table for one summary statistic, ties kept at the cut line
    ///
    /// Drivers with a zero value are left out, mirroring the unranked
    /// semantics of individual rankings. Entries are pre-sorted by name so
    /// equal values list alphabetically.
    pub fn league_table(
        &self,
        stat: impl Fn(&DriverSummary) -> u32,
        top: Option<usize>,
    ) -> Vec<RankedEntry<&DriverSummary>> {
        let mut entries: Vec<(&DriverSummary, u32)> = self
            .summaries
            .iter()
            .map(|summary| (summary, stat(summary)))
            .filter(|(_, value)| *value > 0)
            .collect();
        entries.sort_by(|a, b| a.0.name.cmp(&b.0.name));

        top_n_with_ties(entries, top)
    }

    /// The full report for one driver, or `None` when the name matches no
    /// summary record
    pub fn driver_report(&self, name: &str) -> Option<DriverReport> {
        let summary = self.find_driver(name)?.clone();
        let participations = self.participations_for(&summary.name);

        debug!(
            "Building report for {} over {} participations",
            summary.name,
            participations.len()
        );

        let hat_tricks = self.hat_tricks_for(&summary.name);
        let grand_chelems = self.grand_chelems_for(&summary.name);

        let rates = RateStats {
            podium_rate: rate_percent(summary.podiums, summary.races),
            win_rate: rate_percent(summary.wins, summary.races),
            top_ten_rate: rate_percent(summary.top_tens, summary.races),
            retirement_rate: rate_percent(summary.retirements, summary.races),
        };

        let efficiency = EfficiencyStats {
            races_per_podium: races_per(summary.podiums, summary.races),
            races_per_win: races_per(summary.wins, summary.races),
        };

        let streaks = StreakStats {
            podium_streak: longest_podium_streak(participations.iter().copied()),
            win_streak: longest_win_streak(participations.iter().copied()),
        };

        let rankings = RankingTable {
            races: self.rank_by(summary.races, |s| s.races),
            wins: self.rank_by(summary.wins, |s| s.wins),
            podiums: self.rank_by(summary.podiums, |s| s.podiums),
            poles: self.rank_by(summary.poles, |s| s.poles),
            fast_laps: self.rank_by(summary.fast_laps, |s| s.fast_laps),
            top_tens: self.rank_by(summary.top_tens, |s| s.top_tens),
            titles: self.rank_by(summary.titles_total(), DriverSummary::titles_total),
            hat_tricks: competition_rank(hat_tricks, self.hat_trick_tally().values().copied()),
            grand_chelems: competition_rank(
                grand_chelems,
                self.grand_chelem_tally().values().copied(),
            ),
        };

        Some(DriverReport {
            derived: DerivedStats {
                hat_tricks,
                grand_chelems,
            },
            rates,
            efficiency,
            streaks,
            rankings,
            best_position: best_finishing_position(participations.iter().copied()),
            dominant_circuits: dominant_circuits(participations.iter().copied()),
            seasons: group_by_year(&participations),
            leagues: group_by_championship(&participations),
            circuits: group_by_circuit(&participations),
            milestones: collect_milestones(&participations),
            summary,
        })
    }

    fn hat_trick_tally(&self) -> &HashMap<String, u32> {
        self.hat_trick_tally
            .get_or_init(|| tally_flag(&self.participations, |p| p.hat_trick))
    }

    fn grand_chelem_tally(&self) -> &HashMap<String, u32> {
        self.grand_chelem_tally
            .get_or_init(|| tally_flag(&self.participations, |p| p.grand_chelem))
    }
}

/// Tally a participation flag per driver (keyed by folded name)
fn tally_flag(
    participations: &[Participation],
    flag: impl Fn(&Participation) -> bool,
) -> HashMap<String, u32> {
    let mut tally = HashMap::new();
    for participation in participations {
        if flag(participation) {
            let key = participation.driver.trim().to_lowercase();
            if !key.is_empty() {
                *tally.entry(key).or_insert(0) += 1;
            }
        }
    }
    tally
}

fn tally_value(tally: &HashMap<String, u32>, name: &str) -> u32 {
    tally
        .get(&name.trim().to_lowercase())
        .copied()
        .unwrap_or(0)
}
