use std::collections::HashMap;

use super::*;
use crate::auth::{CredentialValidator, Credentials};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert!(!config.admin.is_configured());
    assert_eq!(config.locales.default_locale().as_str(), "ru");
    assert_eq!(config.locales.supported_locales().len(), 4);
    assert!(config.bundle_dir.is_none());
    assert!(!config.cookie_secure);
}

#[test]
fn full_environment_is_read() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("ADMIN_USERNAME", "admin"),
        ("ADMIN_PASSWORD", "secret"),
        ("SUPPORTED_LOCALES", "en,fr"),
        ("DEFAULT_LOCALE", "fr"),
        ("LOCALE_BUNDLE_DIR", "/srv/messages"),
        ("COOKIE_SECURE", "yes"),
    ]))
    .unwrap();

    assert_eq!(config.port, 8080);
    assert!(config.admin.is_configured());
    assert_eq!(config.locales.default_locale().as_str(), "fr");
    assert_eq!(config.bundle_dir, Some(PathBuf::from("/srv/messages")));
    assert!(config.cookie_secure);

    let validator = CredentialValidator::new(config.admin);
    assert_eq!(validator.matches(&Credentials::new("admin", "secret")), Ok(true));
}

#[test]
fn default_locale_alone_selects_from_builtin_table() {
    let config = AppConfig::from_lookup(lookup_from(&[("DEFAULT_LOCALE", "uk")])).unwrap();
    assert_eq!(config.locales.default_locale().as_str(), "uk");
}

#[test]
fn locale_list_without_builtin_default_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("SUPPORTED_LOCALES", "en,fr")])).unwrap_err();
    assert!(matches!(err, ConfigError::Locale(LocaleError::DefaultNotSupported(_))));
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "http"));
}

#[test]
fn admin_username_with_separator_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("ADMIN_USERNAME", "ad:min"), ("ADMIN_PASSWORD", "secret")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::AdminUsernameSeparator));
}

#[test]
fn accepted_admin_pair_round_trips_through_token() {
    let config = AppConfig::from_lookup(lookup_from(&[("ADMIN_USERNAME", "admin"), ("ADMIN_PASSWORD", "pa:ss")]))
        .unwrap();
    let creds = Credentials::new("admin", "pa:ss");
    CredentialValidator::new(config.admin).validate(&creds).unwrap();
    assert_eq!(crate::auth::token::attempt_decode(crate::auth::token::issue(&creds).as_str()).unwrap(), creds);
}

#[test]
fn half_configured_admin_is_not_configured() {
    let config = AppConfig::from_lookup(lookup_from(&[("ADMIN_USERNAME", "admin")])).unwrap();
    assert!(!config.admin.is_configured());
}

#[test]
fn blank_bundle_dir_is_ignored() {
    let config = AppConfig::from_lookup(lookup_from(&[("LOCALE_BUNDLE_DIR", "  ")])).unwrap();
    assert!(config.bundle_dir.is_none());
}
