//! Streak detection over file-ordered participations
//!
//! Streaks scan a driver's participations in their natural sheet order —
//! never re-sorted — and find the longest run of consecutive entries
//! satisfying a predicate. Any non-satisfying entry resets the running
//! counter; the maximum seen is the streak.

use crate::app::models::Participation;

/// Longest run of consecutive participations satisfying `predicate`
pub fn longest_streak<'a>(
    participations: impl IntoIterator<Item = &'a Participation>,
    predicate: impl Fn(&Participation) -> bool,
) -> u32 {
    let mut best = 0u32;
    let mut current = 0u32;

    for participation in participations {
        if predicate(participation) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }

    best
}

/// Longest run of podium finishes (positions 1-3)
pub fn longest_podium_streak<'a>(
    participations: impl IntoIterator<Item = &'a Participation>,
) -> u32 {
    longest_streak(participations, |p| p.position.is_podium())
}

/// Longest run of wins
pub fn longest_win_streak<'a>(
    participations: impl IntoIterator<Item = &'a Participation>,
) -> u32 {
    longest_streak(participations, |p| p.position.is_win())
}
