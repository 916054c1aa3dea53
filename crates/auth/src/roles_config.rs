//! The collection of every role declared in a configuration document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cdconfig_core::{
    CaseInsensitiveString, ConfigErrors, ConfigResult, ValidationContext,
};

use crate::plugin_role::PluginRoleConfig;
use crate::role::Role;
use crate::role_config::RoleConfig;
use crate::schema::NAME;
use crate::users::RoleUser;

const DUPLICATE_ROLE_NAME: &str = "Role names should be unique. Role with the same name exists.";

/// Either kind of role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleDefinition {
    #[serde(rename = "role")]
    User(RoleConfig),
    #[serde(rename = "pluginRole")]
    Plugin(PluginRoleConfig),
}

impl RoleDefinition {
    fn as_role(&self) -> &dyn Role {
        match self {
            RoleDefinition::User(role) => role,
            RoleDefinition::Plugin(role) => role,
        }
    }

    fn as_role_mut(&mut self) -> &mut dyn Role {
        match self {
            RoleDefinition::User(role) => role,
            RoleDefinition::Plugin(role) => role,
        }
    }

    pub fn as_plugin(&self) -> Option<&PluginRoleConfig> {
        match self {
            RoleDefinition::Plugin(role) => Some(role),
            RoleDefinition::User(_) => None,
        }
    }
}

impl Role for RoleDefinition {
    fn name(&self) -> Option<&CaseInsensitiveString> {
        self.as_role().name()
    }

    fn set_name(&mut self, name: CaseInsensitiveString) {
        self.as_role_mut().set_name(name);
    }

    fn do_get_users(&self) -> Vec<RoleUser> {
        self.as_role().do_get_users()
    }

    fn do_set_users(&mut self, users: Vec<RoleUser>) {
        self.as_role_mut().do_set_users(users);
    }

    fn errors(&self) -> &ConfigErrors {
        self.as_role().errors()
    }

    fn add_error(&mut self, field: &str, message: String) {
        self.as_role_mut().add_error(field, message);
    }

    fn validate(&mut self, ctx: &ValidationContext) {
        self.as_role_mut().validate(ctx);
    }
}

impl From<RoleConfig> for RoleDefinition {
    fn from(value: RoleConfig) -> Self {
        Self::User(value)
    }
}

impl From<PluginRoleConfig> for RoleDefinition {
    fn from(value: PluginRoleConfig) -> Self {
        Self::Plugin(value)
    }
}

/// Every role of a configuration document, in declaration order.
///
/// Owns the checks that need to see all roles at once, such as name
/// uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolesConfig(Vec<RoleDefinition>);

impl RolesConfig {
    pub fn new(roles: impl IntoIterator<Item = RoleDefinition>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn add(&mut self, role: impl Into<RoleDefinition>) {
        self.0.push(role.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.0.iter()
    }

    /// First role with `name`, compared case-insensitively.
    pub fn find_by_name(&self, name: &CaseInsensitiveString) -> Option<&RoleDefinition> {
        self.0.iter().find(|role| role.name() == Some(name))
    }

    /// Removes every role named `name`; returns how many were removed.
    pub fn remove_by_name(&mut self, name: &CaseInsensitiveString) -> usize {
        let before = self.0.len();
        self.0.retain(|role| role.name() != Some(name));
        before - self.0.len()
    }

    pub fn is_unique_role_name(&self, name: &CaseInsensitiveString) -> bool {
        self.0.iter().filter(|role| role.name() == Some(name)).count() <= 1
    }

    pub fn plugin_roles(&self) -> impl Iterator<Item = &PluginRoleConfig> {
        self.0.iter().filter_map(RoleDefinition::as_plugin)
    }

    /// Plugin roles resolved through the auth config `auth_config_id`.
    pub fn plugin_roles_for_auth_config<'a>(
        &'a self,
        auth_config_id: &'a str,
    ) -> impl Iterator<Item = &'a PluginRoleConfig> {
        self.plugin_roles()
            .filter(move |role| role.auth_config_id() == Some(auth_config_id))
    }

    /// Names of the roles that list `user` as a member.
    pub fn memberships_for(&self, user: &CaseInsensitiveString) -> Vec<&CaseInsensitiveString> {
        self.0
            .iter()
            .filter(|role| role.has_member(user))
            .filter_map(Role::name)
            .collect()
    }

    /// Validates every role, then marks roles whose names collide.
    pub fn validate(&mut self, ctx: &ValidationContext) {
        let ctx = ctx.with_parent("roles");
        tracing::debug!(path = %ctx.path(), roles = self.0.len(), "validating roles");

        for role in &mut self.0 {
            let label = role
                .name()
                .map(CaseInsensitiveString::to_string)
                .unwrap_or_default();
            role.validate(&ctx.with_parent(label));

            if let RoleDefinition::Plugin(plugin) = role {
                let label = format!(
                    "plugin role '{}'",
                    plugin.name().map(CaseInsensitiveString::as_str).unwrap_or_default()
                );
                plugin.properties_mut().validate_uniqueness(&label);
            }
        }

        let mut counts: HashMap<CaseInsensitiveString, usize> = HashMap::new();
        for name in self.0.iter().filter_map(Role::name) {
            *counts.entry(name.clone()).or_default() += 1;
        }
        for role in &mut self.0 {
            let duplicated = role
                .name()
                .and_then(|name| counts.get(name))
                .is_some_and(|count| *count > 1);
            if duplicated {
                tracing::warn!(path = %ctx.path(), role = ?role.name(), "duplicate role name");
                role.add_error(NAME, DUPLICATE_ROLE_NAME.to_string());
            }
        }
    }

    /// Every error recorded on the roles and their properties.
    pub fn errors(&self) -> ConfigErrors {
        let mut all = ConfigErrors::new();
        for role in &self.0 {
            all.add_all(role.errors());
            if let RoleDefinition::Plugin(plugin) = role {
                for property in plugin.properties() {
                    all.add_all(property.errors());
                }
            }
        }
        all
    }

    /// `Ok(())` if nothing has been recorded against any role.
    pub fn ensure_valid(&self) -> ConfigResult<()> {
        self.errors().into_result()
    }
}
