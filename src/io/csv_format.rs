//! CSV format handling for the expense export
//!
//! This module centralizes the output format:
//! - The fixed header line
//! - Raw rows: every value wrapped in double quotes exactly as-is
//! - Standard rows: RFC 4180 quoting through the `csv` crate
//!
//! All functions write to an arbitrary `Write` (no file handling) for easy testing.
//!
//! # Raw rows
//!
//! Raw rows do not escape anything. A value containing a double quote or a
//! line break produces a row that a standard CSV parser reads back
//! differently. This is the established export format and is kept
//! byte-for-byte; `QuoteMode::Standard` is the opt-in alternative.

use crate::cli::QuoteMode;
use crate::types::{ExportError, FlatExpense, FLAT_EXPENSE_HEADER};
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Header line, identical in both quoting modes
pub fn header_line() -> String {
    FLAT_EXPENSE_HEADER.join(",")
}

/// Render one record as a raw row (without line terminator)
pub fn format_raw_row(record: &FlatExpense) -> String {
    record
        .to_fields()
        .iter()
        .map(|value| format!("\"{}\"", value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write flattened expenses in CSV format
///
/// Writes the header line followed by one line per record, in input order.
/// Every line ends with `\n`.
///
/// # Arguments
///
/// * `records` - Flattened expenses to write
/// * `mode` - Quoting applied to data rows
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_expenses_csv(
    records: &[FlatExpense],
    mode: QuoteMode,
    output: &mut dyn Write,
) -> Result<(), ExportError> {
    writeln!(output, "{}", header_line())?;

    match mode {
        QuoteMode::Raw => {
            for record in records {
                writeln!(output, "{}", format_raw_row(record))?;
            }
            output.flush()?;
        }
        QuoteMode::Standard => {
            let mut writer = WriterBuilder::new()
                .quote_style(QuoteStyle::Always)
                .from_writer(output);
            for record in records {
                writer.write_record(record.to_fields())?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}
