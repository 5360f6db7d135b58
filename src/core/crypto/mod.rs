/*!
Cryptographic suites and the registry that names them.

This module provides the capability traits a suite implements, the
shared XOF construction, the built-in suites and the suite registry.
*/

// Capability traits
pub mod traits;

// Hash-stream XOF shared by the built-in suites
pub mod xof;

// Built-in suites
pub mod suites;

// Registry for suite lookup by name
pub mod registry;

// Re-export frequently used types
pub use registry::{
    SuiteHandle, SuiteInfo, SuiteRegistry, SuiteRegistryBuilder,
    find, get_registry, install, list_suites, must_find,
};
pub use traits::{
    Encoding, Group, HashFactory, Marshaling, Point, Random, Scalar, Suite, Xof, XofFactory,
};
pub use xof::HashStreamXof;
