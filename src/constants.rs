//! Application constants for grip_stats
//!
//! This module contains the sentinel values, thresholds, and classification
//! helpers shared by the parsing and aggregation layers.

// =============================================================================
// Sheet Value Sentinels
// =============================================================================

/// Affirmative flag value used throughout the league sheets ("yes")
pub const FLAG_YES: &str = "SIM";

/// Alternate affirmative accepted for the constructors-championship column
/// ("team" in the source sheets)
pub const FLAG_TEAM: &str = "TIME";

/// Delimiter between multiple broadcast links in a single cell
pub const LINK_DELIMITER: &str = "||";

// =============================================================================
// Classification Thresholds
// =============================================================================

/// Finishing positions at or below this count as a podium
pub const PODIUM_CUTOFF: u32 = 3;

/// Finishing positions at or below this count as a top-10
pub const TOP_TEN_CUTOFF: u32 = 10;

/// Minimum wins at a single circuit before it is reported as dominated
pub const MIN_DOMINANCE_WINS: u32 = 3;

/// Retirement labels recognized in the finishing-position column
pub const RETIREMENT_LABELS: &[&str] = &["DNF", "DQ", "ABANDON"];

/// Check whether a free-text finishing label marks a retirement
pub fn is_retirement_label(label: &str) -> bool {
    let upper = label.to_uppercase();
    RETIREMENT_LABELS.iter().any(|tag| upper.contains(tag))
}

// =============================================================================
// Ranking
// =============================================================================

/// Display sentinel for "not ranked" (zero occurrences of the statistic).
/// Internal code uses `Option`; this value only appears at the presentation
/// boundary and in the JSON interchange format.
pub const UNRANKED: u32 = 999;
