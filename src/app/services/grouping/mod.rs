//! Grouping and hierarchy builders over participation records
//!
//! These builders bucket one driver's participations into the three
//! hierarchies the presentation layer renders with progressive disclosure,
//! plus the chronological career milestones. All of them are pure
//! transforms over an immutable record slice.
//!
//! - [`seasons`] - year → season buckets with per-bucket totals
//! - [`championships`] - league → (league, season, category) championships
//! - [`circuits`] - per-circuit career totals
//! - [`milestones`] - first occurrence of each career achievement

pub mod championships;
pub mod circuits;
pub mod milestones;
pub mod seasons;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use championships::{ChampionshipEntry, LeagueGroup};
pub use circuits::CircuitGroup;
pub use milestones::{Milestone, Milestones};
pub use seasons::{SeasonBucket, YearGroup};
