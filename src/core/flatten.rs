//! Projection of expenses onto the flat export record

use crate::types::{Expense, FlatExpense};

/// Flatten one expense into its six exported fields
///
/// `details` falls back to an empty string when the service sent `null`.
/// Shares, repayments and every other attribute are dropped.
pub fn flatten_expense(expense: &Expense) -> FlatExpense {
    FlatExpense {
        id: expense.id,
        description: expense.description.clone(),
        details: expense.details.clone().unwrap_or_default(),
        cost: expense.cost.clone(),
        created_at: expense.created_at.clone(),
        category_name: expense.category.name.clone(),
    }
}

/// Flatten a batch of expenses, preserving order and cardinality
pub fn flatten_expenses(expenses: &[Expense]) -> Vec<FlatExpense> {
    expenses.iter().map(flatten_expense).collect()
}
