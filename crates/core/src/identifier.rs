//! Case-insensitive identifiers used across the configuration tree.

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier compared without regard to case.
///
/// The spelling given at construction is kept for display and serialization;
/// equality, ordering and hashing use the lowercase form, so `"Admin"` and
/// `"admin"` name the same thing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CaseInsensitiveString {
    name: String,
    lowercase: String,
}

impl CaseInsensitiveString {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let lowercase = name.to_lowercase();
        Self { name, lowercase }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn to_lower(&self) -> &str {
        &self.lowercase
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl PartialEq for CaseInsensitiveString {
    fn eq(&self, other: &Self) -> bool {
        self.lowercase == other.lowercase
    }
}

impl Eq for CaseInsensitiveString {}

impl Hash for CaseInsensitiveString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lowercase.hash(state);
    }
}

impl PartialOrd for CaseInsensitiveString {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CaseInsensitiveString {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.lowercase.cmp(&other.lowercase)
    }
}

impl core::fmt::Display for CaseInsensitiveString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<String> for CaseInsensitiveString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CaseInsensitiveString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<CaseInsensitiveString> for String {
    fn from(value: CaseInsensitiveString) -> Self {
        value.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &CaseInsensitiveString) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_case() {
        let upper = CaseInsensitiveString::new("Admin");
        let lower = CaseInsensitiveString::new("admin");

        assert_eq!(upper, lower);
        assert_eq!(hash_of(&upper), hash_of(&lower));
        assert_ne!(upper, CaseInsensitiveString::new("admins"));
    }

    #[test]
    fn keeps_original_spelling() {
        let name = CaseInsensitiveString::new("ReleaseManagers");
        assert_eq!(name.as_str(), "ReleaseManagers");
        assert_eq!(name.to_lower(), "releasemanagers");
        assert_eq!(name.to_string(), "ReleaseManagers");
    }

    #[test]
    fn blank_detection() {
        assert!(CaseInsensitiveString::new("   ").is_blank());
        assert!(!CaseInsensitiveString::new("x").is_blank());
    }

    #[test]
    fn serializes_as_original_string() {
        let name = CaseInsensitiveString::new("Admin");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Admin\"");

        let back: CaseInsensitiveString = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "Admin");
    }
}
