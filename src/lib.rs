//! Splitwise Expense Export Library
//! # Overview
//!
//! This library exports the expenses of one Splitwise group to a flat CSV file.
//!
//! # Architecture
//!
//! The run is strictly sequential: authenticate → resolve group → fetch
//! expenses → flatten → write file → report count.
//!
//! - [`types`] - Core data types (Group, Expense, FlatExpense, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Credentials read from the environment
//! - [`client`] - Blocking HTTP client for the Splitwise API
//! - [`core`] - Business logic components:
//!   - [`core::resolver`] - Group name → identifier lookup
//!   - [`core::flatten`] - Six-field projection of an expense
//!   - [`core::exporter`] - Orchestration of a whole export
//! - [`io`] - CSV output
//!
//! # Output Format
//!
//! ```text
//! id,description,details,cost,created_at,category_name
//! "7","Dinner","","42.00","2024-01-01T00:00:00Z","Food"
//! ```
//!
//! Values are wrapped in double quotes without escaping unless
//! [`cli::QuoteMode::Standard`] is selected.

// Module declarations
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use client::SplitwiseClient;
pub use config::Config;
pub use crate::core::{ExpenseExporter, ExpenseService, ExportOutcome};
pub use io::write_expenses_csv;
pub use types::{Expense, ExportError, FlatExpense, Group, GroupId};
