//! Group-related types
//!
//! A group is a named collection of users sharing expenses in Splitwise.
//! The export only needs the identifier and the name for the name→id lookup.

use serde::Deserialize;

/// Group identifier as assigned by the remote service
pub type GroupId = u64;

/// A group as returned by the `get_groups` endpoint
///
/// Any additional attributes in the payload (members, balances, avatars)
/// are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

impl Group {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Group {
            id,
            name: name.into(),
        }
    }
}
