//! `cdconfig-core` — configuration-tree building blocks.
//!
//! Pure, in-memory primitives shared by every configuration entity: the
//! field-keyed error bag, case-insensitive identifiers, the identifier rules,
//! and plugin configuration properties. No I/O happens here.

pub mod builder;
pub mod config_errors;
pub mod error;
pub mod identifier;
pub mod name_validator;
pub mod property;
pub mod validation;

pub use builder::{Cipher, ConfigurationPropertyBuilder};
pub use config_errors::ConfigErrors;
pub use error::{CipherError, ConfigError, ConfigResult};
pub use identifier::CaseInsensitiveString;
pub use name_validator::NameTypeValidator;
pub use property::{Configuration, ConfigurationProperty};
pub use validation::ValidationContext;
