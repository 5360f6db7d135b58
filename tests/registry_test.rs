#![cfg(feature = "ed25519")]

mod common;

use std::sync::Arc;

use common::RenamedSuite;
use crypto_suites::{
    RegistryError, SuiteHandle, SuiteRegistry, SuiteRegistryBuilder, find, list_suites, must_find,
};

// ----- Process-wide registry -----

#[test]
fn test_default_registry_finds_ed25519_in_any_case() {
    let suite = find("Ed25519").unwrap();
    for name in ["ed25519", "ED25519", "eD25519"] {
        let other = find(name).unwrap();
        assert!(Arc::ptr_eq(&suite, &other), "{} resolved to a different suite", name);
    }
    assert_eq!(suite.to_string(), "Ed25519");
}

#[test]
fn test_default_registry_unknown_suite() {
    assert_eq!(find("ed25519-variant").unwrap_err(), RegistryError::UnknownSuite);
    assert_eq!(find("").unwrap_err(), RegistryError::UnknownSuite);
}

#[test]
fn test_must_find_returns_same_handle() {
    let found = find("ed25519").unwrap();
    let must = must_find("ED25519");
    assert!(Arc::ptr_eq(&found, &must));
}

#[test]
#[should_panic(expected = "Suite Unknown-Suite not found.")]
fn test_must_find_panics_with_requested_name() {
    must_find("Unknown-Suite");
}

#[test]
fn test_list_suites() {
    assert!(list_suites().contains(&"ed25519".to_string()));
}

// ----- Builder-made registries -----

#[test]
fn test_registered_name_is_case_insensitive() {
    let registry = SuiteRegistryBuilder::new()
        .with_suite(Arc::new(RenamedSuite::new("P256-Test")))
        .build();

    for name in ["P256-Test", "p256-test", "P256-TEST"] {
        let suite = registry.find(name).unwrap();
        assert_eq!(suite.to_string(), "P256-Test");
    }
    assert_eq!(registry.names(), vec!["p256-test".to_string()]);
    assert!(registry.find("ed25519").is_err());
}

#[test]
fn test_last_registration_wins() {
    let first: SuiteHandle = Arc::new(RenamedSuite::new("Dup"));
    let second: SuiteHandle = Arc::new(RenamedSuite::new("DUP"));

    let mut builder = SuiteRegistryBuilder::new();
    builder.extend([first.clone(), second.clone()]);
    let registry = builder.build();

    assert_eq!(registry.len(), 1);
    let found = registry.find("dup").unwrap();
    assert!(Arc::ptr_eq(&found, &second));
    assert_eq!(found.to_string(), "DUP");
}

#[test]
fn test_empty_name_is_accepted() {
    let registry = SuiteRegistryBuilder::new()
        .with_suite(Arc::new(RenamedSuite::new("")))
        .build();
    assert!(registry.find("").is_ok());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_custom_suites_alongside_defaults() {
    let registry = SuiteRegistryBuilder::with_defaults()
        .with_suite(Arc::new(RenamedSuite::new("Ed25519-Test")))
        .build();

    assert_eq!(registry.names(), vec!["ed25519".to_string(), "ed25519-test".to_string()]);
    let default = registry.must_find("ed25519");
    let custom = registry.must_find("ed25519-test");
    assert!(!Arc::ptr_eq(&default, &custom));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = Arc::new(SuiteRegistry::with_defaults());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let name = if i % 2 == 0 { "ed25519" } else { "ED25519" };
                registry.find(name).is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
