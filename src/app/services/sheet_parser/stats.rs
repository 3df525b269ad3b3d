//! Parsing statistics and result structures for sheet processing
//!
//! This module provides types for tracking parse outcomes and organizing
//! parsed records for downstream aggregation.

/// Parsing result with typed records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// Successfully parsed records
    pub records: Vec<T>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub rows_read: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of all-empty separator rows dropped
    pub separator_rows: usize,

    /// Number of rows skipped due to errors
    pub rows_skipped: usize,

    /// List of row-level errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage of non-separator rows
    pub fn success_rate(&self) -> f64 {
        let candidates = self.rows_read.saturating_sub(self.separator_rows);
        if candidates == 0 {
            100.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}
