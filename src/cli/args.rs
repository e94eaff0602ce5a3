use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default name of the exported file
pub const DEFAULT_OUTPUT_FILE: &str = "expenses.csv";

/// Export the expenses of a Splitwise group to CSV
#[derive(Parser, Debug)]
#[command(name = "splitwise-export")]
#[command(about = "Export the expenses of a Splitwise group to CSV", long_about = None)]
pub struct CliArgs {
    /// Name of the group to export (exact, case-sensitive match)
    #[arg(value_name = "GROUP", help = "Name of the Splitwise group to export")]
    pub group_name: String,

    /// Output CSV file path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Path of the CSV file to write (created or overwritten)"
    )]
    pub output: PathBuf,

    /// Quoting applied to data rows
    #[arg(
        long = "quoting",
        value_name = "MODE",
        default_value = "raw",
        help = "Row quoting: 'raw' wraps values in quotes as-is, 'standard' escapes embedded quotes"
    )]
    pub quoting: QuoteMode,

    /// Environment file holding the credentials
    ///
    /// Without it, `.env` is searched in the working directory and its parents.
    #[arg(
        long = "env-file",
        value_name = "PATH",
        help = "File to load CONSUMER_KEY, CONSUMER_SECRET and API_KEY from (default: nearest .env)"
    )]
    pub env_file: Option<PathBuf>,
}

/// Available quoting modes for data rows
///
/// `Raw` interpolates values between double quotes without escaping, so a
/// value containing a double quote produces a row standard CSV parsers
/// misread. `Standard` doubles embedded quotes per RFC 4180.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum QuoteMode {
    Raw,
    Standard,
}
