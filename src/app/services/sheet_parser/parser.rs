//! Core sheet parser implementation
//!
//! This module provides the parsing orchestration for both league sheets:
//! reader construction, alias resolution, row iteration, and separator-row
//! filtering. Malformed rows never abort a parse; they are tallied and
//! skipped.

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use super::column_mapping::{ColumnMap, SheetField};
use super::record_parser::{parse_participation_row, parse_summary_row};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{DriverSummary, Participation};
use crate::Result;

/// Parse the driver-summary sheet into typed records
///
/// Rows without a driver name are treated as separators and dropped.
pub fn parse_summary_sheet(content: &str, sheet: &str) -> Result<ParseResult<DriverSummary>> {
    parse_sheet(content, sheet, parse_summary_row, |summary: &DriverSummary| {
        !summary.name.trim().is_empty()
    })
}

/// Parse the participation sheet into typed records
///
/// The validity invariant applies: a row with driver, circuit, and finishing
/// position all empty is a separator and never reaches an aggregate.
pub fn parse_participation_sheet(
    content: &str,
    sheet: &str,
) -> Result<ParseResult<Participation>> {
    parse_sheet(content, sheet, parse_participation_row, Participation::is_valid)
}

/// Shared parse loop over one sheet
///
/// The reader runs in flexible, non-strict mode: short rows read as empty
/// trailing fields and an unterminated quote consumes to end of input
/// instead of failing the parse.
fn parse_sheet<F, T>(
    content: &str,
    sheet: &str,
    parse_row: impl Fn(&StringRecord, &ColumnMap<F>) -> T,
    keep: impl Fn(&T) -> bool,
) -> Result<ParseResult<T>>
where
    F: SheetField,
{
    info!("Parsing sheet: {}", sheet);

    // Sheets exported from spreadsheet tools often lead with a UTF-8 BOM;
    // it must not end up glued to the first header.
    let body = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = csv_reader
        .headers()
        .map_err(|e| crate::Error::sheet_format(sheet, format!("Failed to read headers: {}", e)))?
        .clone();

    // A file with no header row at all is an empty dataset, not an error
    if headers.iter().all(|h| h.trim().is_empty()) {
        warn!("Sheet {} has no header row; loading as empty dataset", sheet);
        return Ok(ParseResult {
            records: Vec::new(),
            stats: ParseStats::new(),
        });
    }

    let mapping = ColumnMap::<F>::analyze(&headers, sheet)?;
    debug!(
        "Resolved {} of {} fields for {}",
        mapping.resolved_fields(),
        F::all().len(),
        sheet
    );

    let mut stats = ParseStats::new();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        stats.rows_read += 1;

        match result {
            Ok(row) => {
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    stats.separator_rows += 1;
                    continue;
                }

                let record = parse_row(&row, &mapping);
                if keep(&record) {
                    records.push(record);
                    stats.records_parsed += 1;
                } else {
                    stats.separator_rows += 1;
                }
            }
            Err(e) => {
                stats.rows_skipped += 1;
                stats
                    .errors
                    .push(format!("Row {}: {}", stats.rows_read, e));
                debug!("Skipped row {} in {}: {}", stats.rows_read, sheet, e);
            }
        }
    }

    info!(
        "Parsed {} records from {} rows in {} ({} separators, {} skipped)",
        stats.records_parsed, stats.rows_read, sheet, stats.separator_rows, stats.rows_skipped
    );

    if !stats.is_successful() {
        warn!(
            "Low parse success rate for {}: {:.1}%",
            sheet,
            stats.success_rate()
        );
    }

    Ok(ParseResult { records, stats })
}
