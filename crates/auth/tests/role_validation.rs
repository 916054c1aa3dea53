use cdconfig_auth::{PluginRoleConfig, Role, RoleConfig, RoleUser, RolesConfig};
use cdconfig_core::{
    CaseInsensitiveString, Cipher, CipherError, ConfigError, ConfigurationPropertyBuilder,
    ValidationContext,
};

struct PrefixCipher;

impl Cipher for PrefixCipher {
    fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        Ok(format!("enc:{plain}"))
    }

    fn decrypt(&self, encrypted: &str) -> Result<String, CipherError> {
        encrypted
            .strip_prefix("enc:")
            .map(str::to_owned)
            .ok_or_else(|| CipherError::decrypt("missing prefix"))
    }
}

fn load_document() -> RolesConfig {
    let cipher = PrefixCipher;
    let builder = ConfigurationPropertyBuilder::with_cipher(&cipher);

    let release_managers = PluginRoleConfig::new(
        "ReleaseManagers",
        "ldap-auth-1",
        [
            builder.create("GroupSearchFilter", Some("(cn=release-managers)"), None, false),
            builder.create("BindPassword", Some("hunter2"), None, true),
        ],
    );

    RolesConfig::new([
        RoleConfig::new("admins", [RoleUser::new("root")]).into(),
        release_managers.into(),
    ])
}

#[test]
fn well_formed_document_validates_cleanly() {
    cdconfig_observability::init();

    let mut roles = load_document();
    roles.validate(&ValidationContext::root());

    assert!(roles.ensure_valid().is_ok());
}

#[test]
fn broken_auth_config_reference_blocks_the_document() {
    cdconfig_observability::init();

    let mut roles = load_document();
    let mut ops = PluginRoleConfig::new("ops", "ldap-auth-1", []);
    ops.set_auth_config_id("bad id!");
    roles.add(ops);

    roles.validate(&ValidationContext::root());

    let Err(ConfigError::Invalid(errors)) = roles.ensure_valid() else {
        panic!("expected the document to be rejected");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors.on("authConfigId").unwrap().contains("'bad id!'"));
}

#[test]
fn copying_properties_between_roles_drops_secrets() {
    let roles = load_document();
    let source = roles
        .find_by_name(&CaseInsensitiveString::new("releasemanagers"))
        .and_then(|role| role.as_plugin())
        .expect("plugin role present");

    let password = source.properties().get_property("BindPassword").unwrap();
    assert!(password.is_secure());
    assert_eq!(
        password.resolved_value(Some(&PrefixCipher)).unwrap().as_deref(),
        Some("hunter2")
    );

    let mut copy = PluginRoleConfig::new("ReleaseManagersCopy", "ldap-auth-2", []);
    copy.add_configurations(source.properties());

    assert!(copy.properties().iter().all(|p| !p.is_secure()));
    assert_eq!(
        copy.properties().list_of_config_keys(),
        vec!["GroupSearchFilter", "BindPassword"]
    );
    assert_eq!(
        copy.properties()
            .get_property("GroupSearchFilter")
            .and_then(|p| p.config_value()),
        Some("(cn=release-managers)")
    );

    let mut copy_roles = RolesConfig::new([copy.into()]);
    copy_roles.validate(&ValidationContext::root());
    assert!(copy_roles.ensure_valid().is_ok());
    assert!(copy_roles.iter().all(|role| role.errors().is_empty()));
}
