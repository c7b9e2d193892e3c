//! Tests for the configuration module.
//!
//! This module covers loading the trie policy from files and environment
//! overrides, and building a trie from the loaded policy.

use crate::config::{ConfigLoader, TrieConfig};
use crate::error::config::ConfigError;
use crate::error::Error;
use crate::tests::test_utils::create_test_dir;
use std::fs;

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_defaults() {
    std::env::remove_var("TEST_DEFAULTS__SQUASH");

    let loader = ConfigLoader::new(None::<&str>, "TEST_DEFAULTS");
    let config = loader.load().unwrap();
    assert_eq!(config, TrieConfig::default());
    assert!(!config.squash);
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    std::env::remove_var("TEST_FILE__SQUASH");

    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("trie.toml");
    let content = toml::to_string(&TrieConfig { squash: true }).unwrap();
    fs::write(&config_path, content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    assert!(loader.load().unwrap().squash);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("trie.json");
    fs::write(&config_path, r#"{ "squash": true }"#).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_JSON");
    assert!(loader.load().unwrap().squash);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("trie_env.toml");
    fs::write(&config_path, "squash = false\n").unwrap();

    std::env::set_var("TEST_ENV__SQUASH", "true");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();
    assert!(config.squash);

    std::env::remove_var("TEST_ENV__SQUASH");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_file() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    match loader.load() {
        Err(ConfigError::FileNotFound(path)) => assert_eq!(path, config_path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

/// Test that an invalid file and an unknown extension are rejected.
#[test]
fn test_load_invalid_config() {
    let dir = create_test_dir().unwrap();

    let config_path = dir.path().join("invalid.toml");
    fs::write(&config_path, "squash = [not toml").unwrap();
    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));

    let config_path = dir.path().join("trie.ini");
    fs::write(&config_path, "squash = true").unwrap();
    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test building a trie from a loaded policy.
#[test]
fn test_build_from_config() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("build.toml");
    fs::write(&config_path, "squash = true\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BUILD");
    let trie = crate::build_from_config(&loader, &["abcd", "abce"], vec![1, 2]).unwrap();
    assert!(trie.squash_on_insert());
    assert_eq!(trie.root().step(), 4);

    let err = crate::build_from_config(&loader, &["b", "a"], vec![1, 2]).unwrap_err();
    assert!(matches!(err, Error::Trie(_)));

    let missing = ConfigLoader::new(Some(dir.path().join("none.toml")), "TEST_BUILD");
    let err = crate::build_from_config(&missing, &["a"], vec![1]).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::FileNotFound(_))));
}
