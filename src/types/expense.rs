//! Expense-related types
//!
//! This module defines the expense shape as received from the `get_expenses`
//! endpoint and the flat six-field record that ends up in the CSV export.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Expense identifier as assigned by the remote service
pub type ExpenseId = u64;

/// Column names of the flattened record, in output order
pub const FLAT_EXPENSE_HEADER: [&str; 6] = [
    "id",
    "description",
    "details",
    "cost",
    "created_at",
    "category_name",
];

/// Category reference nested in every expense
///
/// Only `name` is exported; a malformed `id` is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    pub name: String,
}

/// A single recorded cost inside a group
///
/// `category` is required: an expense without one fails to deserialize,
/// which aborts the fetch. Attributes that are not exported never fail
/// decoding; unexpected shapes become `None` or are skipped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,

    /// Free-text notes; the service sends `null` when none were entered
    #[serde(default)]
    pub details: Option<String>,

    /// Monetary amount exactly as the service formats it (e.g. `"42.00"`)
    pub cost: String,

    /// ISO 8601 creation timestamp, kept verbatim
    pub created_at: String,

    pub category: Category,

    #[serde(default, deserialize_with = "lenient")]
    pub currency_code: Option<String>,

    /// Per-user paid/owed shares
    #[serde(default, deserialize_with = "lenient_vec")]
    pub users: Vec<ExpenseShare>,

    /// Simplified debts between users
    #[serde(default, deserialize_with = "lenient_vec")]
    pub repayments: Vec<Debt>,
}

/// A user's share of an expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExpenseShare {
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<ExpenseUser>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub paid_share: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub owed_share: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub net_balance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExpenseUser {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
}

/// Amount owed from one user to another for an expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Debt {
    #[serde(default, deserialize_with = "lenient")]
    pub from: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub to: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub amount: Option<String>,
}

// Decode any JSON value, keeping it only if it has the expected shape
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// Decode a JSON array, skipping elements of the wrong shape; anything but
// an array (including null) yields an empty list
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Flattened expense record
///
/// The sole output shape of the export. Every field is taken verbatim from
/// the source expense, apart from `category_name` which is lifted out of the
/// nested category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatExpense {
    pub id: ExpenseId,
    pub description: String,
    pub details: String,
    pub cost: String,
    pub created_at: String,
    pub category_name: String,
}

impl FlatExpense {
    /// Field values in [`FLAT_EXPENSE_HEADER`] order
    pub fn to_fields(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.description.clone(),
            self.details.clone(),
            self.cost.clone(),
            self.created_at.clone(),
            self.category_name.clone(),
        ]
    }
}
