//! Group name resolution

use crate::types::{Group, GroupId};

/// Find the identifier of the group named `name`
///
/// Names are compared exactly (case-sensitive, no trimming). When several
/// groups share the name, the first one in `groups` wins.
///
/// # Returns
///
/// * `Some(id)` of the first matching group
/// * `None` if no group carries that name
pub fn find_group_id(groups: &[Group], name: &str) -> Option<GroupId> {
    groups
        .iter()
        .find(|group| group.name == name)
        .map(|group| group.id)
}
