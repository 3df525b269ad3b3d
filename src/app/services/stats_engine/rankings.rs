//! Global competition ranking with tie handling
//!
//! Rank = 1 + number of drivers with a strictly greater value, so equal
//! values share a rank (standard competition ranking). A value of zero is
//! never ranked. The scan is O(D) per request, which is fine at league
//! scale; a sorted array with binary search is the natural step up if the
//! driver count ever warrants it.

use crate::app::models::Rank;
use serde::Serialize;

/// Rank one value against the whole field
///
/// The field may include the subject's own value; only strictly greater
/// values push the rank down, so self-inclusion is harmless.
pub fn competition_rank(value: u32, field: impl IntoIterator<Item = u32>) -> Rank {
    if value == 0 {
        return Rank::unranked();
    }

    let greater = field.into_iter().filter(|&v| v > value).count() as u32;
    Rank::ranked(1 + greater)
}

/// One entry of a ranked table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<T> {
    /// Displayed rank; consecutive equal values share it
    pub rank: u32,

    /// The ranked statistic value
    pub value: u32,

    /// The ranked subject
    pub item: T,
}

/// Build a descending ranked table, keeping ties at the cut line
///
/// With `top = Some(n)`, the table keeps the first `n` entries plus every
/// further entry tied with the `n`-th value, so the result may be longer
/// than `n`. Displayed ranks repeat across equal values and jump past them
/// when the value drops (1, 2, 2, 2, 5, ...). The input order is preserved
/// among equals (stable sort), letting callers pre-sort for name tiebreaks.
pub fn top_n_with_ties<T>(entries: Vec<(T, u32)>, top: Option<usize>) -> Vec<RankedEntry<T>> {
    let mut entries = entries;
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let cutoff_value = match top {
        Some(n) if n == 0 => return Vec::new(),
        Some(n) if n <= entries.len() => entries[n - 1].1,
        _ => 0,
    };

    let mut table = Vec::new();
    let mut previous_value = None;
    let mut rank = 0u32;

    for (index, (item, value)) in entries.into_iter().enumerate() {
        if let Some(n) = top {
            if index >= n && value < cutoff_value {
                break;
            }
        }

        if previous_value != Some(value) {
            rank = index as u32 + 1;
            previous_value = Some(value);
        }

        table.push(RankedEntry { rank, value, item });
    }

    table
}
