//! CSV Export functionality
//!
//! Renders records into CSV text with a fixed column set. Cells containing a
//! comma, a double quote or a newline are quoted, with inner quotes doubled.

use crate::error::ExportResult;
use crate::models::{value_text, Record, Transaction};
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Exported columns, in order. Used for both the header and every row.
pub const CSV_COLUMNS: [&str; 7] = [
    "date",
    "type",
    "description",
    "category",
    "amount",
    "from_account",
    "to_account",
];

/// Convert records to a CSV document
///
/// Returns an empty string (no header) when `records` is `None` or empty.
/// Lines are joined with `\n` and there is no trailing newline.
pub fn convert_to_csv(records: Option<&[Record]>) -> String {
    let records = match records {
        Some(records) if !records.is_empty() => records,
        _ => return String::new(),
    };

    let header = CSV_COLUMNS
        .iter()
        .map(|column| escape_csv(column))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header);
    lines.extend(records.iter().map(format_row));

    debug!(rows = records.len(), "converted records to CSV");
    lines.join("\n")
}

/// Convert typed transactions to a CSV document
pub fn transactions_to_csv(transactions: &[Transaction]) -> String {
    let records: Vec<Record> = transactions.iter().map(Record::from).collect();
    convert_to_csv(Some(&records))
}

/// Write the CSV document for `records` to a writer
pub fn write_csv<W: Write>(records: &[Record], writer: &mut W) -> ExportResult<()> {
    writer.write_all(convert_to_csv(Some(records)).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn format_row(record: &Record) -> String {
    CSV_COLUMNS
        .iter()
        .map(|column| format_cell(record.get(column)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format one cell; absent and null values are empty
fn format_cell(value: Option<&Value>) -> String {
    value
        .and_then(value_text)
        .map(|text| escape_csv(&text))
        .unwrap_or_default()
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
