//! Splitwise Expense Export CLI
//!
//! Exports the expenses of one Splitwise group to a CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- "Trip"
//! cargo run -- --output trip.csv "Trip"
//! cargo run -- --quoting standard "Trip"
//! RUST_LOG=debug cargo run -- --env-file ~/.splitwise.env "Trip"
//! ```
//!
//! Credentials are read from `CONSUMER_KEY`, `CONSUMER_SECRET` and `API_KEY`,
//! loaded first from `--env-file`, or from the nearest `.env` in the working
//! directory or one of its parents.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Group not found
//! - 2: Error (missing credentials, remote failure, file not writable, etc.)

use splitwise_export::{cli, config, Config, ExpenseExporter, ExportOutcome, SplitwiseClient};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Diagnostics go to stderr; stdout only carries the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A missing env file is fine, the variables may already be set
    match config::load_env_file(args.env_file.as_deref()) {
        Ok(path) => debug!(path = %path.display(), "env file loaded"),
        Err(e) => debug!(error = %e, "env file not loaded"),
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    debug!(?config, "configuration loaded");

    let client = match SplitwiseClient::new(&config) {
        Ok(client) => client,
        Err(e) => fail(e),
    };

    let exporter = ExpenseExporter::new(&args.output, args.quoting);
    match exporter.export(&client, &args.group_name) {
        Ok(ExportOutcome::Saved { count }) => {
            println!("Saved {} expenses to CSV", count);
        }
        Ok(ExportOutcome::GroupNotFound) => {
            println!("Group not found");
            process::exit(1);
        }
        Err(e) => fail(e),
    }
}

fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    process::exit(2);
}
