//! Export orchestration
//!
//! Runs the export end to end, strictly in sequence:
//! list groups → resolve the name → fetch expenses → flatten → write file.
//!
//! The exporter holds no state between runs. Every remote or file failure
//! is returned as-is; an unknown group name is a regular outcome.

use crate::cli::QuoteMode;
use crate::core::flatten::flatten_expenses;
use crate::core::resolver::find_group_id;
use crate::core::traits::ExpenseService;
use crate::io::write_expenses_file;
use crate::types::ExportError;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Maximum number of expenses requested from the service
///
/// Groups with more expenses are silently truncated to this many.
pub const EXPENSE_FETCH_LIMIT: usize = 10_000;

/// Result of a completed export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written with `count` data rows
    Saved { count: usize },
    /// No group carries the requested name; nothing was fetched or written
    GroupNotFound,
}

/// Exports one group's expenses to a CSV file
///
/// # Examples
///
/// ```no_run
/// use splitwise_export::cli::QuoteMode;
/// use splitwise_export::client::SplitwiseClient;
/// use splitwise_export::config::Config;
/// use splitwise_export::core::{ExpenseExporter, ExportOutcome};
///
/// let config = Config::from_env().unwrap();
/// let client = SplitwiseClient::new(&config).unwrap();
/// let exporter = ExpenseExporter::new("expenses.csv", QuoteMode::Raw);
///
/// match exporter.export(&client, "Trip").unwrap() {
///     ExportOutcome::Saved { count } => println!("Saved {} expenses to CSV", count),
///     ExportOutcome::GroupNotFound => println!("Group not found"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ExpenseExporter {
    output: PathBuf,
    mode: QuoteMode,
}

impl ExpenseExporter {
    pub fn new(output: impl Into<PathBuf>, mode: QuoteMode) -> Self {
        ExpenseExporter {
            output: output.into(),
            mode,
        }
    }

    /// Export the expenses of the group named `group_name`
    ///
    /// # Returns
    ///
    /// * `Ok(ExportOutcome::Saved { count })` once the file is written
    /// * `Ok(ExportOutcome::GroupNotFound)` if the name matches no group
    /// * `Err(ExportError)` on any remote, decoding or file failure
    pub fn export<S>(&self, service: &S, group_name: &str) -> Result<ExportOutcome, ExportError>
    where
        S: ExpenseService + ?Sized,
    {
        let groups = service.list_groups()?;
        debug!(groups = groups.len(), "fetched groups");

        let group_id = match find_group_id(&groups, group_name) {
            Some(id) => id,
            None => {
                info!(group = group_name, "no group with this name");
                return Ok(ExportOutcome::GroupNotFound);
            }
        };
        debug!(group = group_name, group_id, "resolved group");

        let expenses = service.list_expenses(group_id, EXPENSE_FETCH_LIMIT)?;
        if expenses.len() >= EXPENSE_FETCH_LIMIT {
            warn!(
                limit = EXPENSE_FETCH_LIMIT,
                "fetch limit reached, older expenses may be missing from the export"
            );
        }

        let records = flatten_expenses(&expenses);
        let count = write_expenses_file(&self.output, &records, self.mode)?;

        info!(count, path = %self.output.display(), "export complete");
        Ok(ExportOutcome::Saved { count })
    }
}
