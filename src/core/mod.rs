//! Core components of the suite registry.
//!
//! This module contains the capability traits every suite implements,
//! the registry itself, the built-in suites and error handling.

// Capability traits, registry and suites
pub mod crypto;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result, RegistryError, EncodingError, GroupError, XofError};
pub use self::constants::VERSION;
