//! Construction of [`ConfigurationProperty`] values from raw input.

use crate::error::CipherError;
use crate::property::{CONFIGURATION_VALUE, ConfigurationProperty, ENCRYPTED_VALUE};

/// Symmetric cipher used for secure property values.
///
/// The server's real cipher lives elsewhere; this is the seam it plugs into.
pub trait Cipher {
    fn encrypt(&self, plain: &str) -> Result<String, CipherError>;

    fn decrypt(&self, encrypted: &str) -> Result<String, CipherError>;
}

const BOTH_VALUES_GIVEN: &str = "You may only specify `value` or `encrypted_value`, not both!";
const ENCRYPTED_ON_UNSECURED: &str = "encrypted_value cannot be specified to a unsecured property.";

fn is_not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Builds properties, encrypting secure values and recording (rather than
/// failing on) inconsistent input.
#[derive(Default, Clone, Copy)]
pub struct ConfigurationPropertyBuilder<'a> {
    cipher: Option<&'a dyn Cipher>,
}

impl<'a> ConfigurationPropertyBuilder<'a> {
    /// Builder without a cipher; secure plain values cannot be encrypted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cipher(cipher: &'a dyn Cipher) -> Self {
        Self {
            cipher: Some(cipher),
        }
    }

    pub fn create(
        &self,
        key: &str,
        value: Option<&str>,
        encrypted_value: Option<&str>,
        is_secure: bool,
    ) -> ConfigurationProperty {
        let mut property = ConfigurationProperty::with_key(key);

        if is_not_blank(value) && is_not_blank(encrypted_value) {
            property.set_value(value.map(str::to_owned));
            property.set_encrypted_value(encrypted_value.map(str::to_owned));
            property.add_error(CONFIGURATION_VALUE, BOTH_VALUES_GIVEN);
            property.add_error(ENCRYPTED_VALUE, BOTH_VALUES_GIVEN);
            return property;
        }

        if is_secure {
            if is_not_blank(encrypted_value) {
                property.set_encrypted_value(encrypted_value.map(str::to_owned));
            }
            if let Some(plain) = value.filter(|v| !v.trim().is_empty()) {
                match self.encrypt(plain) {
                    Ok(encrypted) => property.set_encrypted_value(Some(encrypted)),
                    Err(e) => {
                        tracing::warn!(key, error = %e, "could not encrypt secure property");
                        property.add_error(CONFIGURATION_VALUE, e.to_string());
                    }
                }
            }
        } else {
            if is_not_blank(encrypted_value) {
                property.set_encrypted_value(encrypted_value.map(str::to_owned));
                property.add_error(ENCRYPTED_VALUE, ENCRYPTED_ON_UNSECURED);
            }
            if value.is_some() {
                property.set_value(value.map(str::to_owned));
            }
        }

        property
    }

    fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        self.cipher.ok_or(CipherError::Unavailable)?.encrypt(plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reverse;

    impl Cipher for Reverse {
        fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
            Ok(plain.chars().rev().collect())
        }

        fn decrypt(&self, encrypted: &str) -> Result<String, CipherError> {
            Ok(encrypted.chars().rev().collect())
        }
    }

    struct Broken;

    impl Cipher for Broken {
        fn encrypt(&self, _plain: &str) -> Result<String, CipherError> {
            Err(CipherError::encrypt("key not loaded"))
        }

        fn decrypt(&self, _encrypted: &str) -> Result<String, CipherError> {
            Err(CipherError::decrypt("key not loaded"))
        }
    }

    #[test]
    fn plain_property() {
        let property = ConfigurationPropertyBuilder::new().create("url", Some("ldap://x"), None, false);

        assert_eq!(property.config_key_name(), "url");
        assert_eq!(property.config_value(), Some("ldap://x"));
        assert!(!property.is_secure());
        assert!(property.errors().is_empty());
    }

    #[test]
    fn plain_property_without_value() {
        let property = ConfigurationPropertyBuilder::new().create("url", None, None, false);
        assert_eq!(property.config_value(), None);
        assert!(property.errors().is_empty());
    }

    #[test]
    fn secure_property_encrypts_plain_value() {
        let cipher = Reverse;
        let property =
            ConfigurationPropertyBuilder::with_cipher(&cipher).create("password", Some("secret"), None, true);

        assert!(property.is_secure());
        assert_eq!(property.encrypted_value(), Some("terces"));
        assert_eq!(property.config_value(), None);
        assert!(property.errors().is_empty());
    }

    #[test]
    fn secure_property_keeps_given_encrypted_value() {
        let property = ConfigurationPropertyBuilder::new().create("password", None, Some("abc"), true);
        assert_eq!(property.encrypted_value(), Some("abc"));
        assert!(property.errors().is_empty());
    }

    #[test]
    fn secure_value_without_cipher_is_reported() {
        let property = ConfigurationPropertyBuilder::new().create("password", Some("secret"), None, true);

        assert!(!property.is_secure());
        assert_eq!(
            property.errors().on(CONFIGURATION_VALUE),
            Some("no cipher configured to encrypt secure values")
        );
    }

    #[test]
    fn cipher_failure_is_reported() {
        let cipher = Broken;
        let property =
            ConfigurationPropertyBuilder::with_cipher(&cipher).create("password", Some("secret"), None, true);

        assert_eq!(
            property.errors().on(CONFIGURATION_VALUE),
            Some("encryption failed: key not loaded")
        );
    }

    #[test]
    fn both_values_is_an_error_on_both_fields() {
        let property = ConfigurationPropertyBuilder::new().create("password", Some("a"), Some("b"), true);

        assert_eq!(property.config_value(), Some("a"));
        assert_eq!(property.encrypted_value(), Some("b"));
        assert_eq!(property.errors().on(CONFIGURATION_VALUE), Some(BOTH_VALUES_GIVEN));
        assert_eq!(property.errors().on(ENCRYPTED_VALUE), Some(BOTH_VALUES_GIVEN));
    }

    #[test]
    fn encrypted_value_on_unsecured_property_is_flagged() {
        let property = ConfigurationPropertyBuilder::new().create("url", None, Some("abc"), false);

        assert_eq!(property.encrypted_value(), Some("abc"));
        assert_eq!(property.errors().on(ENCRYPTED_VALUE), Some(ENCRYPTED_ON_UNSECURED));
    }
}
