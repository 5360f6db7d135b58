// Installing touches process-wide state, so this file holds a single test.

#![cfg(feature = "ed25519")]

mod common;

use std::sync::Arc;

use common::RenamedSuite;
use crypto_suites::{
    RegistryError, SuiteRegistry, SuiteRegistryBuilder, find, get_registry, install, list_suites,
};

#[test]
fn test_install_custom_registry_once() {
    let registry = SuiteRegistryBuilder::with_defaults()
        .with_suite(Arc::new(RenamedSuite::new("Custom-Suite")))
        .build();
    install(registry).unwrap();

    assert!(find("CUSTOM-SUITE").is_ok());
    assert!(find("ed25519").is_ok());
    assert_eq!(list_suites(), vec!["custom-suite", "ed25519"]);

    // A second install is rejected and leaves the first in place
    assert_eq!(install(SuiteRegistry::default()), Err(RegistryError::AlreadyInstalled));
    assert_eq!(get_registry().len(), 2);
}
