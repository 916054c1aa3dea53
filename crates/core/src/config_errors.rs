//! Field-keyed validation error bag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Validation messages keyed by the field they refer to.
///
/// Messages accumulate: adding to a field that already has messages appends,
/// it never replaces. Fields iterate in name order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigErrors(BTreeMap<String, Vec<String>>);

impl ConfigErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` under `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Merge every message of `other` into this bag.
    pub fn add_all(&mut self, other: &ConfigErrors) {
        for (field, messages) in &other.0 {
            self.0
                .entry(field.clone())
                .or_default()
                .extend(messages.iter().cloned());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages across all fields.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// First message recorded for `field`.
    pub fn on(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Every message recorded for `field`, oldest first.
    pub fn all_on(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every message, grouped by field name.
    pub fn all(&self) -> Vec<&str> {
        self.0.values().flatten().map(String::as_str).collect()
    }

    pub fn first_error(&self) -> Option<&str> {
        self.0.values().flatten().next().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// `Ok(())` when there is nothing to report.
    pub fn into_result(self) -> ConfigResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }
}

impl core::fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let errors = ConfigErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.on("name"), None);
        assert!(errors.all_on("name").is_empty());
        assert!(errors.clone().into_result().is_ok());
    }

    #[test]
    fn add_appends_instead_of_replacing() {
        let mut errors = ConfigErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.on("name"), Some("first"));
        assert_eq!(errors.all_on("name"), ["first", "second"]);
    }

    #[test]
    fn add_all_merges_per_field() {
        let mut a = ConfigErrors::new();
        a.add("name", "a1");

        let mut b = ConfigErrors::new();
        b.add("name", "b1");
        b.add("users", "b2");

        a.add_all(&b);
        assert_eq!(a.all_on("name"), ["a1", "b1"]);
        assert_eq!(a.on("users"), Some("b2"));
        assert_eq!(a.all(), vec!["a1", "b1", "b2"]);
        assert_eq!(a.first_error(), Some("a1"));
    }

    #[test]
    fn into_result_carries_the_bag() {
        let mut errors = ConfigErrors::new();
        errors.add("authConfigId", "bad");

        match errors.clone().into_result() {
            Err(ConfigError::Invalid(bag)) => assert_eq!(bag, errors),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = ConfigErrors::new();
        errors.add("name", "bad");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": ["bad"] }));
    }
}
