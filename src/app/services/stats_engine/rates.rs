//! Rate and efficiency statistics
//!
//! Every computation here guards its denominator: a driver with zero races
//! (or zero podiums, for efficiency) gets an explicit not-applicable value,
//! never a NaN or infinity. Formatting to "40.0%" / "-" happens only at the
//! presentation boundary.

/// Percentage of `total` covered by `count`, or `None` when `total` is zero
pub fn rate_percent(count: u32, total: u32) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64 * 100.0)
    }
}

/// Races needed per occurrence (total / count), or `None` when `count` is zero
pub fn races_per(count: u32, total: u32) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}

/// Render a rate as a percentage with one decimal place, "-" when absent
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "-".to_string(),
    }
}

/// Render an efficiency ratio with one decimal place, "-" when absent
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}
