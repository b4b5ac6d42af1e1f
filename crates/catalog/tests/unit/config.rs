//! # Configuration Tests
//!
//! Defaults and JSON deserialization of the build configuration.

use pretty_assertions::assert_eq;
use rvref_core::config::{AmbiguityScope, BuildConfig};

#[test]
fn test_build_config_default() {
    let config = BuildConfig::default();
    assert!(config.require_documentation);
    assert_eq!(config.ambiguity_scope, AmbiguityScope::AllFormats);
    assert_eq!(AmbiguityScope::default(), AmbiguityScope::AllFormats);
}

#[test]
fn test_empty_json_takes_defaults() {
    assert_eq!(BuildConfig::from_json("{}").unwrap(), BuildConfig::default());
}

#[test]
fn test_partial_json_overrides() {
    let config = BuildConfig::from_json(r#"{ "ambiguity_scope": "same_format" }"#).unwrap();
    assert!(config.require_documentation);
    assert_eq!(config.ambiguity_scope, AmbiguityScope::SameFormat);

    let config = BuildConfig::from_json(r#"{ "require_documentation": false }"#).unwrap();
    assert_eq!(config, BuildConfig::encodings_only());
}

#[test]
fn test_unknown_scope_is_rejected() {
    assert!(BuildConfig::from_json(r#"{ "ambiguity_scope": "never" }"#).is_err());
}
