//! `cdconfig-auth` — authorization roles of the configuration tree.
//!
//! Roles are pure configuration entities: they hold data, validate it into a
//! [`cdconfig_core::ConfigErrors`] bag, and never talk to a plugin or touch
//! storage themselves.

pub mod plugin_role;
pub mod role;
pub mod role_config;
pub mod roles_config;
pub mod schema;
pub mod users;

pub use plugin_role::PluginRoleConfig;
pub use role::{Role, validate_role};
pub use role_config::RoleConfig;
pub use roles_config::{RoleDefinition, RolesConfig};
pub use users::{RoleUser, Users};
