// ABOUTME: Tests for store configuration loading and redaction.
// ABOUTME: Environment handling lives in one test to avoid cross-test races.

use super::config::{ENV_ADDRESS, ENV_DATABASE, ENV_PASSWORD, ENV_USER, StoreConfig};
use crate::error::StoreError;

#[test]
fn test_explicit_construction() {
    let config = StoreConfig::new("http://localhost:3306", "workshopdb", "root", "");
    assert_eq!(config.address, "http://localhost:3306");
    assert_eq!(config.database, "workshopdb");
    assert_eq!(config.user, "root");
    assert_eq!(config.password, "");
}

#[test]
fn test_debug_redacts_password() {
    let config = StoreConfig::new("http://localhost:3306", "workshopdb", "root", "hunter2");
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
}

// Mutates process-wide environment state, so missing-variable and
// default-fallback behavior are checked in a single test body.
#[test]
fn test_from_env() {
    unsafe {
        std::env::remove_var(ENV_ADDRESS);
        std::env::remove_var(ENV_DATABASE);
        std::env::remove_var(ENV_USER);
        std::env::remove_var(ENV_PASSWORD);
    }

    match StoreConfig::from_env() {
        Err(StoreError::Configuration(message)) => assert!(message.contains(ENV_ADDRESS)),
        other => panic!("Expected Configuration error, got {:?}", other.map(|_| ())),
    }

    unsafe {
        std::env::set_var(ENV_ADDRESS, "http://store.example:9090");
    }

    let config = StoreConfig::from_env().unwrap();
    assert_eq!(config.address, "http://store.example:9090");
    assert_eq!(config.database, "workshopdb");
    assert_eq!(config.user, "root");
    assert_eq!(config.password, "");

    unsafe {
        std::env::set_var(ENV_DATABASE, "garage");
        std::env::set_var(ENV_USER, "svc");
        std::env::set_var(ENV_PASSWORD, "secret");
    }

    let config = StoreConfig::from_env().unwrap();
    assert_eq!(config.database, "garage");
    assert_eq!(config.user, "svc");
    assert_eq!(config.password, "secret");

    unsafe {
        std::env::remove_var(ENV_ADDRESS);
        std::env::remove_var(ENV_DATABASE);
        std::env::remove_var(ENV_USER);
        std::env::remove_var(ENV_PASSWORD);
    }
}
