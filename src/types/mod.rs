//! Types module
//!
//! Contains the data structures shared across the exporter:
//! - `group`: Groups and their identifiers
//! - `expense`: Expenses as received from the service, and the flattened record
//! - `error`: Error type for the export pipeline

pub mod error;
pub mod expense;
pub mod group;

pub use error::ExportError;
pub use expense::{
    Category, Debt, Expense, ExpenseId, ExpenseShare, ExpenseUser, FlatExpense,
    FLAT_EXPENSE_HEADER,
};
pub use group::{Group, GroupId};
