/*!
Built-in suites.

Each suite is compiled in behind its own cargo feature and registered by
`register_builtin_suites`.
*/

use crate::core::crypto::registry::SuiteRegistryBuilder;

#[cfg(feature = "ed25519")]
pub mod ed25519;

#[cfg(feature = "ed25519")]
pub use ed25519::{Ed25519Point, Ed25519Scalar, SuiteEd25519};

/// Register every suite enabled in this build
pub fn register_builtin_suites(builder: &mut SuiteRegistryBuilder) {
    #[cfg(feature = "ed25519")]
    builder.register(std::sync::Arc::new(SuiteEd25519::new()));

    #[cfg(not(feature = "ed25519"))]
    let _ = builder;
}
