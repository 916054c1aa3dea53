//! Configuration error model.

use thiserror::Error;

use crate::config_errors::ConfigErrors;

/// Result type used across the configuration layer.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-level error.
///
/// Entities never fail while being populated or validated; they collect
/// [`ConfigErrors`] instead. This type is for the edges where a caller wants a
/// hard yes/no answer (e.g. "is this whole document acceptable?").
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more entities carry field validation errors.
    #[error("configuration is invalid: {0}")]
    Invalid(ConfigErrors),

    /// A secure value could not be encrypted or decrypted.
    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Failure reported by a [`crate::Cipher`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// No cipher was configured where one was required.
    #[error("no cipher configured to encrypt secure values")]
    Unavailable,

    #[error("encryption failed: {0}")]
    Encrypt(String),

    #[error("decryption failed: {0}")]
    Decrypt(String),
}

impl CipherError {
    pub fn encrypt(msg: impl Into<String>) -> Self {
        Self::Encrypt(msg.into())
    }

    pub fn decrypt(msg: impl Into<String>) -> Self {
        Self::Decrypt(msg.into())
    }
}
