//! Role members.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use cdconfig_core::CaseInsensitiveString;

/// A user named as a member of a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleUser(CaseInsensitiveString);

impl RoleUser {
    pub fn new(name: impl Into<CaseInsensitiveString>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &CaseInsensitiveString {
        &self.0
    }
}

impl core::fmt::Display for RoleUser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for RoleUser {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Set of role members.
///
/// Duplicates (compared case-insensitively) collapse on insert and
/// equality does not depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Users(BTreeSet<RoleUser>);

impl Users {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the user was already a member.
    pub fn add(&mut self, user: RoleUser) -> bool {
        self.0.insert(user)
    }

    pub fn remove(&mut self, user: &RoleUser) -> bool {
        self.0.remove(user)
    }

    pub fn contains(&self, user: &RoleUser) -> bool {
        self.0.contains(user)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleUser> {
        self.0.iter()
    }
}

impl FromIterator<RoleUser> for Users {
    fn from_iter<I: IntoIterator<Item = RoleUser>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Users {
    type Item = RoleUser;
    type IntoIter = std::collections::btree_set::IntoIter<RoleUser>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
