//! Core export logic
//!
//! This module contains the export pipeline components:
//! - `traits` - The remote service abstraction
//! - `resolver` - Group name → identifier lookup
//! - `flatten` - Expense → flat record projection
//! - `exporter` - Orchestration of the whole run

pub mod exporter;
pub mod flatten;
pub mod resolver;
pub mod traits;

pub use exporter::{ExpenseExporter, ExportOutcome, EXPENSE_FETCH_LIMIT};
pub use flatten::{flatten_expense, flatten_expenses};
pub use resolver::find_group_id;
pub use traits::ExpenseService;
