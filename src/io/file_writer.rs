//! Output file handling
//!
//! Opens the target file, writes the CSV through a buffer and closes it
//! before returning. The file is truncated on open; a failure part-way
//! leaves whatever was written so far.

use crate::cli::QuoteMode;
use crate::io::csv_format::write_expenses_csv;
use crate::types::{ExportError, FlatExpense};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// Write flattened expenses to `path`, creating or overwriting it
///
/// # Returns
///
/// * `Ok(count)` - number of data rows written
/// * `Err(ExportError::IoError)` if the file cannot be created or written
pub fn write_expenses_file(
    path: &Path,
    records: &[FlatExpense],
    mode: QuoteMode,
) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|e| ExportError::IoError {
        message: format!("Failed to create '{}': {}", path.display(), e),
    })?;
    let mut writer = BufWriter::new(file);

    write_expenses_csv(records, mode, &mut writer)?;

    debug!(path = %path.display(), rows = records.len(), "wrote expenses file");
    Ok(records.len())
}
