//! I/O module
//!
//! Handles CSV output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header, raw and standard rows)
//! - `file_writer` - Writing the export to a file on disk

pub mod csv_format;
pub mod file_writer;

pub use csv_format::{format_raw_row, header_line, write_expenses_csv};
pub use file_writer::write_expenses_file;
