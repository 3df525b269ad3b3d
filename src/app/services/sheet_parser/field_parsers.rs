//! Field parsing utilities for league sheet cells
//!
//! This module provides helper functions for coercing raw cell text into
//! typed values. Coercions never fail: unparseable counts default to zero
//! and unparseable positions become labels, per the sheets' conventions.

use crate::constants::{FLAG_TEAM, FLAG_YES, LINK_DELIMITER};
use regex::Regex;
use std::sync::LazyLock;

/// Trailing whitespace-preceded digit run ("Interlagos 2")
static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d+$").expect("trailing digit pattern"));

/// Trailing whitespace-preceded Roman-numeral run ("Spa II")
static TRAILING_ROMAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[IVX]+$").expect("trailing roman pattern"));

/// Parse a count cell: strip every non-digit character, then parse
///
/// Thousands separators and stray unit text are tolerated this way.
/// Empty or digitless input yields 0.
pub fn parse_count(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().unwrap_or(0)
}

/// Parse a yes/no flag cell: case-insensitive match against "SIM"
pub fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(FLAG_YES)
}

/// Parse the constructors-championship flag cell
///
/// The sheets mark it either "SIM" or "TIME" (the team won).
pub fn parse_constructors_flag(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.eq_ignore_ascii_case(FLAG_YES) || trimmed.eq_ignore_ascii_case(FLAG_TEAM)
}

/// Split a broadcast-link cell on the `||` delimiter
pub fn parse_links(raw: &str) -> Vec<String> {
    raw.split(LINK_DELIMITER)
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a circuit name for grouping
///
/// Strips one trailing whitespace-preceded digit run, then one trailing
/// whitespace-preceded Roman-numeral run, so "Interlagos 2" and
/// "Interlagos II" group with "Interlagos". Idempotent. Heuristic: a circuit
/// whose real name ends in an I/V/X word after a space will merge too.
pub fn normalize_circuit_name(raw: &str) -> String {
    let stripped = TRAILING_DIGITS.replace(raw.trim(), "");
    let stripped = TRAILING_ROMAN.replace(&stripped, "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_variants() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count(" 42 "), 42);
        assert_eq!(parse_count("1.234"), 1234);
        assert_eq!(parse_count("12 corridas"), 12);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("n/a"), 0);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("SIM"));
        assert!(parse_flag("sim"));
        assert!(parse_flag(" Sim "));
        assert!(!parse_flag("TIME"));
        assert!(!parse_flag("NAO"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_parse_constructors_flag_accepts_time() {
        assert!(parse_constructors_flag("SIM"));
        assert!(parse_constructors_flag("TIME"));
        assert!(parse_constructors_flag("time"));
        assert!(!parse_constructors_flag("NAO"));
        assert!(!parse_constructors_flag(""));
    }

    #[test]
    fn test_parse_links() {
        assert_eq!(
            parse_links("https://a.example || https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(parse_links("https://a.example"), vec!["https://a.example"]);
        assert!(parse_links("").is_empty());
        assert!(parse_links(" || ").is_empty());
    }

    #[test]
    fn test_normalize_circuit_name() {
        assert_eq!(normalize_circuit_name("Interlagos 2"), "Interlagos");
        assert_eq!(normalize_circuit_name("Spa II"), "Spa");
        assert_eq!(normalize_circuit_name("Spa 2"), "Spa");
        assert_eq!(normalize_circuit_name("Monza"), "Monza");
        assert_eq!(normalize_circuit_name("  Monza  "), "Monza");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in ["Spa 2", "Spa II", "Interlagos", "Monza X 3"] {
            let once = normalize_circuit_name(name);
            assert_eq!(normalize_circuit_name(&once), once);
        }
    }

    #[test]
    fn test_normalize_requires_preceding_whitespace() {
        // No whitespace before the suffix run: name kept as-is
        assert_eq!(normalize_circuit_name("Mix"), "Mix");
        assert_eq!(normalize_circuit_name("Circuit3"), "Circuit3");
    }

    #[test]
    fn test_normalize_strips_digits_then_roman() {
        // One pass of each, digits first
        assert_eq!(normalize_circuit_name("Monza X 3"), "Monza");
    }
}
