/*!
Registry for cryptographic suites.

This module maps case-insensitive names to suites so callers can pick a
suite at runtime.
*/

pub mod global;
pub mod manager;

// Re-export registry types and process-wide functions
pub use global::{find, get_registry, install, list_suites, must_find};
pub use manager::{SuiteHandle, SuiteInfo, SuiteRegistry, SuiteRegistryBuilder};
