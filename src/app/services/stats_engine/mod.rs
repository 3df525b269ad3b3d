//! Statistics aggregation engine for league data
//!
//! The engine is constructed once per loaded dataset pair and serves every
//! derived statistic as a pure read over that snapshot: rates, efficiency,
//! streaks, records, global competition rankings, and the full per-driver
//! report. Statistics the summary sheet lacks (hat-tricks, grand chelems)
//! are tallied from participations on first use and memoized for the
//! engine's lifetime.
//!
//! ## Architecture
//!
//! - [`engine`] - The [`StatsEngine`] snapshot object and report assembly
//! - [`rates`] - Rate and efficiency computations with zero guards
//! - [`streaks`] - Longest-run detection over file-ordered participations
//! - [`rankings`] - Competition ranking and top-N-with-ties
//! - [`records`] - Best finishing position and circuit dominance
//! - [`report`] - Serializable view-model structures

pub mod engine;
pub mod rankings;
pub mod rates;
pub mod records;
pub mod report;
pub mod streaks;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::StatsEngine;
pub use rankings::{RankedEntry, competition_rank, top_n_with_ties};
pub use report::DriverReport;
