//! Roles that list their members directly.

use serde::{Deserialize, Serialize};

use cdconfig_core::{CaseInsensitiveString, ConfigErrors, ValidationContext};

use crate::role::{Role, validate_role};
use crate::users::RoleUser;

/// A role whose members are enumerated in the configuration.
///
/// Members keep their declared order and repeats are kept as given so that
/// validation can point them out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleConfig {
    #[serde(default)]
    name: Option<CaseInsensitiveString>,
    #[serde(default)]
    users: Vec<RoleUser>,
    #[serde(skip)]
    errors: ConfigErrors,
}

impl RoleConfig {
    pub fn new(
        name: impl Into<CaseInsensitiveString>,
        users: impl IntoIterator<Item = RoleUser>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            users: users.into_iter().collect(),
            errors: ConfigErrors::new(),
        }
    }
}

impl Role for RoleConfig {
    fn name(&self) -> Option<&CaseInsensitiveString> {
        self.name.as_ref()
    }

    fn set_name(&mut self, name: CaseInsensitiveString) {
        self.name = Some(name);
    }

    fn do_get_users(&self) -> Vec<RoleUser> {
        self.users.clone()
    }

    fn do_set_users(&mut self, users: Vec<RoleUser>) {
        self.users = users;
    }

    fn errors(&self) -> &ConfigErrors {
        &self.errors
    }

    fn add_error(&mut self, field: &str, message: String) {
        self.errors.add(field, message);
    }

    fn validate(&mut self, ctx: &ValidationContext) {
        validate_role(self.name.as_ref(), &self.users, &mut self.errors);
        tracing::debug!(path = %ctx.path(), role = %self, errors = self.errors.len(), "role validated");
    }
}

impl PartialEq for RoleConfig {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.users == other.users
    }
}

impl Eq for RoleConfig {}

impl core::fmt::Display for RoleConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let users: Vec<_> = self.users.iter().map(RoleUser::to_string).collect();
        write!(
            f,
            "RoleConfig{{name={}, users=[{}]}}",
            self.name.as_ref().map(CaseInsensitiveString::as_str).unwrap_or_default(),
            users.join(", ")
        )
    }
}
