//! The capability every role variant shares, and the checks common to all of
//! them.

use std::collections::HashSet;

use cdconfig_core::{CaseInsensitiveString, ConfigErrors, NameTypeValidator, ValidationContext};

use crate::schema::{NAME, USERS};
use crate::users::RoleUser;

/// A named grouping of users used for authorization decisions.
///
/// Variants differ in where membership comes from (a local list, or an
/// authorization plugin). `do_get_users`/`do_set_users` are the hooks the
/// provided membership helpers go through.
pub trait Role {
    fn name(&self) -> Option<&CaseInsensitiveString>;

    /// Replaces the name; nothing is checked until [`Role::validate`].
    fn set_name(&mut self, name: CaseInsensitiveString);

    fn do_get_users(&self) -> Vec<RoleUser>;

    fn do_set_users(&mut self, users: Vec<RoleUser>);

    fn errors(&self) -> &ConfigErrors;

    fn add_error(&mut self, field: &str, message: String);

    /// Appends any problems to [`Role::errors`]. Never resets earlier errors.
    fn validate(&mut self, ctx: &ValidationContext);

    fn users(&self) -> Vec<RoleUser> {
        self.do_get_users()
    }

    fn add_user(&mut self, user: RoleUser) {
        let mut users = self.do_get_users();
        users.push(user);
        self.do_set_users(users);
    }

    fn remove_user(&mut self, user: &RoleUser) {
        let users = self.do_get_users().into_iter().filter(|u| u != user).collect();
        self.do_set_users(users);
    }

    fn has_member(&self, user: &CaseInsensitiveString) -> bool {
        self.do_get_users().iter().any(|u| u.name() == user)
    }
}

/// Checks common to every role kind.
///
/// - the name must be a legal identifier;
/// - member names must not be blank;
/// - a member may be listed only once.
pub fn validate_role<'a>(
    name: Option<&CaseInsensitiveString>,
    users: impl IntoIterator<Item = &'a RoleUser>,
    errors: &mut ConfigErrors,
) {
    let validator = NameTypeValidator::new();
    let raw_name = name.map(CaseInsensitiveString::as_str);
    if validator.is_name_invalid(raw_name) {
        errors.add(NAME, validator.error_message("role", raw_name));
    }

    let mut seen = HashSet::new();
    for user in users {
        if user.name().is_blank() {
            errors.add(USERS, "User name cannot be blank.");
            continue;
        }
        if !seen.insert(user) {
            errors.add(
                USERS,
                format!(
                    "User '{user}' already exists in '{}'.",
                    raw_name.unwrap_or_default()
                ),
            );
        }
    }
}
