//! Service abstraction for the remote expense-sharing API
//!
//! The exporter only talks to the service through this trait, so the
//! production HTTP client and in-memory test doubles are interchangeable.

use crate::types::{Expense, ExportError, Group, GroupId};

/// The two remote operations the export consumes
pub trait ExpenseService {
    /// List every group visible to the authenticated user
    fn list_groups(&self) -> Result<Vec<Group>, ExportError>;

    /// List the expenses of one group, at most `limit` of them
    ///
    /// A single request; anything beyond `limit` is not returned.
    fn list_expenses(&self, group_id: GroupId, limit: usize) -> Result<Vec<Expense>, ExportError>;
}
