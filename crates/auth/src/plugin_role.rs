//! Roles whose membership is delegated to an authorization plugin.

use serde::{Deserialize, Serialize};

use cdconfig_core::{
    CaseInsensitiveString, ConfigErrors, Configuration, ConfigurationProperty,
    ConfigurationPropertyBuilder, NameTypeValidator, ValidationContext,
};

use crate::role::{Role, validate_role};
use crate::schema::{AUTH_CONFIG_ID, NAME, PLUGIN_ROLE_SCHEMA};
use crate::users::{RoleUser, Users};

/// A role backed by an authorization plugin.
///
/// Instead of listing users, the role carries a bag of plugin-defined
/// properties and the id of the auth config (plugin instance) that resolves
/// membership.
///
/// # Invariants
/// - Setters never validate; problems surface only through [`Role::validate`].
/// - Equality and hashing cover the properties, the name (case-insensitively)
///   and the auth-config id. Members and errors are operational state and do
///   not take part.
/// - `errors` only ever grows, through [`Role::add_error`] or
///   [`Role::validate`]; see [`PluginRoleConfig::clear_errors`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRoleConfig {
    #[serde(default)]
    name: Option<CaseInsensitiveString>,
    #[serde(default)]
    auth_config_id: Option<String>,
    #[serde(default)]
    properties: Configuration,
    #[serde(skip)]
    users: Users,
    #[serde(skip)]
    errors: ConfigErrors,
}

impl PluginRoleConfig {
    pub fn new(
        name: impl Into<CaseInsensitiveString>,
        auth_config_id: impl Into<String>,
        properties: impl IntoIterator<Item = ConfigurationProperty>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            auth_config_id: Some(auth_config_id.into()),
            properties: Configuration::new(properties),
            ..Default::default()
        }
    }

    pub fn auth_config_id(&self) -> Option<&str> {
        self.auth_config_id.as_deref()
    }

    pub fn set_auth_config_id(&mut self, auth_config_id: impl Into<String>) {
        self.auth_config_id = Some(auth_config_id.into());
    }

    pub fn properties(&self) -> &Configuration {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Configuration {
        &mut self.properties
    }

    /// Re-imports `configurations` as plain properties.
    ///
    /// Each property is rebuilt from its key and plain value only, so any
    /// encrypted value is dropped and the copy is never secure.
    pub fn add_configurations<'a>(
        &mut self,
        configurations: impl IntoIterator<Item = &'a ConfigurationProperty>,
    ) {
        let builder = ConfigurationPropertyBuilder::new();
        for property in configurations {
            if property.is_secure() {
                tracing::trace!(
                    key = property.config_key_name(),
                    "dropping encrypted value on re-import"
                );
            }
            self.properties.add(builder.create(
                property.config_key_name(),
                property.config_value(),
                None,
                false,
            ));
        }
    }

    /// Throws away every recorded error so the next validation starts clean.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Required attributes that have not been set.
    pub fn missing_required_attributes(&self) -> Vec<&'static str> {
        PLUGIN_ROLE_SCHEMA
            .required_attributes()
            .filter(|attribute| match *attribute {
                NAME => self.name.is_none(),
                AUTH_CONFIG_ID => self.auth_config_id.is_none(),
                _ => false,
            })
            .collect()
    }
}

impl Role for PluginRoleConfig {
    fn name(&self) -> Option<&CaseInsensitiveString> {
        self.name.as_ref()
    }

    fn set_name(&mut self, name: CaseInsensitiveString) {
        self.name = Some(name);
    }

    fn do_get_users(&self) -> Vec<RoleUser> {
        self.users.iter().cloned().collect()
    }

    fn do_set_users(&mut self, users: Vec<RoleUser>) {
        self.users = users.into_iter().collect();
    }

    fn errors(&self) -> &ConfigErrors {
        &self.errors
    }

    fn add_error(&mut self, field: &str, message: String) {
        self.errors.add(field, message);
    }

    fn validate(&mut self, ctx: &ValidationContext) {
        let before = self.errors.len();

        validate_role(self.name.as_ref(), self.users.iter(), &mut self.errors);

        let validator = NameTypeValidator::new();
        let auth_config_id = self.auth_config_id.as_deref();
        if validator.is_name_invalid(auth_config_id) {
            self.errors.add(
                AUTH_CONFIG_ID,
                validator.error_message("plugin role authConfigId", auth_config_id),
            );
        }

        let added = self.errors.len() - before;
        if added > 0 {
            tracing::warn!(path = %ctx.path(), role = %self, added, "plugin role is invalid");
        } else {
            tracing::debug!(path = %ctx.path(), role = %self, "plugin role validated");
        }
    }
}

impl PartialEq for PluginRoleConfig {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties
            && self.name == other.name
            && self.auth_config_id == other.auth_config_id
    }
}

impl Eq for PluginRoleConfig {}

impl core::hash::Hash for PluginRoleConfig {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.properties.hash(state);
        self.name.hash(state);
        self.auth_config_id.hash(state);
    }
}

impl core::fmt::Display for PluginRoleConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PluginRoleConfig{{name={}, authConfigId='{}'}}",
            self.name.as_ref().map(CaseInsensitiveString::as_str).unwrap_or_default(),
            self.auth_config_id.as_deref().unwrap_or_default()
        )
    }
}
