//! Lexical rules for configuration identifiers.

use std::sync::LazyLock;

use regex::Regex;

/// Longest identifier accepted by default.
pub const MAX_LENGTH: usize = 255;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_\-][a-zA-Z0-9_\-.]*$").expect("identifier pattern compiles")
});

/// Checks whether a string is a legal identifier (role names, auth-config ids,
/// pipeline names, ...).
///
/// An identifier is alphanumeric with underscores, hyphens and periods, does
/// not start with a period, and is at most [`NameTypeValidator::max_length`]
/// characters long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTypeValidator {
    max_length: usize,
}

impl Default for NameTypeValidator {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH,
        }
    }
}

impl NameTypeValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// A missing value is never valid.
    pub fn is_name_valid(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) => name.chars().count() <= self.max_length && NAME_PATTERN.is_match(name),
            None => false,
        }
    }

    pub fn is_name_invalid(&self, name: Option<&str>) -> bool {
        !self.is_name_valid(name)
    }

    /// Human-readable rejection message for `name`, described as `label`.
    pub fn error_message(&self, label: &str, name: Option<&str>) -> String {
        format!(
            "Invalid {label} name '{}'. This must be alphanumeric and can contain underscores, \
             hyphens and periods (however, it cannot start with a period). The maximum allowed \
             length is {} characters.",
            name.unwrap_or_default(),
            self.max_length
        )
    }
}
