//! Field-to-attribute mapping for role elements.
//!
//! Persistence layers read these tables instead of reflecting over the
//! structs; the same names double as the keys validation errors are filed
//! under.

/// Error key and attribute name for a role's name.
pub const NAME: &str = "name";
/// Error key and attribute name for a plugin role's auth-config reference.
pub const AUTH_CONFIG_ID: &str = "authConfigId";
/// Error key for problems with a role's member list.
pub const USERS: &str = "users";

/// One attribute of a persisted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub optional: bool,
}

/// How an entity is laid out when persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSchema {
    pub tag: &'static str,
    pub attributes: &'static [AttributeSpec],
    /// Tag of the repeated child element, if the entity is a collection.
    pub children: Option<&'static str>,
}

impl ElementSchema {
    pub fn required_attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes
            .iter()
            .filter(|a| !a.optional)
            .map(|a| a.name)
    }
}

pub const PLUGIN_ROLE_SCHEMA: ElementSchema = ElementSchema {
    tag: "pluginRole",
    attributes: &[
        AttributeSpec {
            name: NAME,
            optional: false,
        },
        AttributeSpec {
            name: AUTH_CONFIG_ID,
            optional: false,
        },
    ],
    children: Some("property"),
};

pub const ROLE_SCHEMA: ElementSchema = ElementSchema {
    tag: "role",
    attributes: &[AttributeSpec {
        name: NAME,
        optional: false,
    }],
    children: Some("user"),
};
