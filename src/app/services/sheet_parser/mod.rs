//! CSV sheet parser for the Grip Racing league data files
//!
//! This module parses the league's two published sheets — driver summaries
//! and race participations — into strongly-typed records. Header spellings
//! vary across exports (accented, unaccented, lower-case), so column
//! resolution goes through an explicit alias table instead of raw header
//! strings.
//!
//! ## Architecture
//!
//! - [`parser`] - Core parsing orchestration over raw sheet text
//! - [`column_mapping`] - Alias-aware column resolution
//! - [`record_parser`] - Individual row to typed record conversion
//! - [`field_parsers`] - Utility functions for value coercion
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use grip_stats::app::services::sheet_parser::parser;
//!
//! # fn example() -> grip_stats::Result<()> {
//! let content = "Piloto,Corridas,Pódios\nAyrton,50,20\n";
//! let result = parser::parse_summary_sheet(content, "pilotos.csv")?;
//!
//! println!("Parsed {} drivers from {} rows",
//!          result.stats.records_parsed,
//!          result.stats.rows_read);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMap, ParticipationField, SheetField, SummaryField};
pub use stats::{ParseResult, ParseStats};
