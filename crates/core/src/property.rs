//! Plugin configuration properties and the ordered container that holds them.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::builder::Cipher;
use crate::config_errors::ConfigErrors;
use crate::error::{CipherError, ConfigResult};

/// Field key for errors about a property's key.
pub const CONFIGURATION_KEY: &str = "configurationKey";
/// Field key for errors about a property's plain value.
pub const CONFIGURATION_VALUE: &str = "configurationValue";
/// Field key for errors about a property's encrypted value.
pub const ENCRYPTED_VALUE: &str = "encryptedValue";

/// A single key/value setting handed to a plugin.
///
/// A property is secure when it carries an encrypted value; secure properties
/// normally have no plain value at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationProperty {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    encrypted_value: Option<String>,
    #[serde(skip)]
    errors: ConfigErrors,
}

impl ConfigurationProperty {
    /// Plain (non-secure) property.
    pub fn plain(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Secure property holding an already-encrypted value.
    pub fn secure(key: impl Into<String>, encrypted_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            encrypted_value: Some(encrypted_value.into()),
            ..Default::default()
        }
    }

    pub(crate) fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub(crate) fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub(crate) fn set_encrypted_value(&mut self, encrypted_value: Option<String>) {
        self.encrypted_value = encrypted_value;
    }

    pub fn config_key_name(&self) -> &str {
        &self.key
    }

    /// The plain value; secure properties report none.
    pub fn config_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn encrypted_value(&self) -> Option<&str> {
        self.encrypted_value.as_deref()
    }

    pub fn is_secure(&self) -> bool {
        self.encrypted_value.is_some()
    }

    /// Value as the plugin should see it, decrypting secure properties.
    pub fn resolved_value(&self, cipher: Option<&dyn Cipher>) -> ConfigResult<Option<String>> {
        match &self.encrypted_value {
            Some(encrypted) => {
                let cipher = cipher.ok_or(CipherError::Unavailable)?;
                Ok(Some(cipher.decrypt(encrypted)?))
            }
            None => Ok(self.value.clone()),
        }
    }

    pub fn errors(&self) -> &ConfigErrors {
        &self.errors
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }
}

impl PartialEq for ConfigurationProperty {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.encrypted_value == other.encrypted_value
    }
}

impl Eq for ConfigurationProperty {}

impl core::hash::Hash for ConfigurationProperty {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
        self.encrypted_value.hash(state);
    }
}

/// Ordered collection of [`ConfigurationProperty`] values.
///
/// Declaration order is kept and takes part in equality. Keys are not forced
/// to be unique on insert; [`Configuration::validate_uniqueness`] reports
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Vec<ConfigurationProperty>);

impl Configuration {
    pub fn new(properties: impl IntoIterator<Item = ConfigurationProperty>) -> Self {
        Self(properties.into_iter().collect())
    }

    pub fn add(&mut self, property: ConfigurationProperty) {
        self.0.push(property);
    }

    /// First property declared with `key`.
    pub fn get_property(&self, key: &str) -> Option<&ConfigurationProperty> {
        self.0.iter().find(|p| p.key == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ConfigurationProperty> {
        self.0.iter()
    }

    pub fn list_of_config_keys(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.key.as_str()).collect()
    }

    /// Key/value view for handing to a plugin.
    ///
    /// Secure properties are left out unless `include_secure` is set, in which
    /// case their encrypted value is reported. Later duplicates win.
    pub fn config_as_map(&self, include_secure: bool) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter(|p| include_secure || !p.is_secure())
            .map(|p| {
                let value = p
                    .encrypted_value
                    .as_ref()
                    .or(p.value.as_ref())
                    .cloned()
                    .unwrap_or_default();
                (p.key.clone(), value)
            })
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|p| !p.errors.is_empty())
    }

    /// Mark every property whose key is declared more than once.
    pub fn validate_uniqueness(&mut self, label: &str) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for property in &self.0 {
            *counts.entry(property.key.clone()).or_default() += 1;
        }

        for property in &mut self.0 {
            if counts.get(&property.key).copied().unwrap_or_default() > 1 {
                let message = format!("Duplicate key '{}' found for {label}", property.key);
                property.add_error(CONFIGURATION_KEY, message);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a ConfigurationProperty;
    type IntoIter = core::slice::Iter<'a, ConfigurationProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<ConfigurationProperty> for Configuration {
    fn from_iter<I: IntoIterator<Item = ConfigurationProperty>>(iter: I) -> Self {
        Self::new(iter)
    }
}
