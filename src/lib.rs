/*!
# Crypto Suites

A name-based registry of cryptographic suites.

## Overview

A suite bundles everything a protocol needs from one family of
primitives:

- Encoding of scalars, points and integers
- Arithmetic in a prime-order group
- A hash function factory
- An extendable-output function factory
- A cryptographically secure random stream

Suites are registered under their self-reported name and looked up
case-insensitively. The process-wide registry holds the built-in suites
unless a custom one is installed at startup:

```ignore
use crypto_suites::{find, Group};

let suite = find("ED25519")?;
let base = suite.point().base();
```

Currently the `Ed25519` suite is built in; its group operations run in
constant time.
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, Result, RegistryError, EncodingError, GroupError, XofError};
pub use crate::core::constants::{VERSION, names, sizes};

// Re-export capability traits
pub use crate::core::crypto::traits::{
    Encoding, Group, GroupResult, HashFactory, Marshaling, Point, Random, Scalar, Suite, Xof,
    XofFactory,
};

// Re-export the registry
pub use crate::core::crypto::registry::{
    SuiteHandle, SuiteInfo, SuiteRegistry, SuiteRegistryBuilder,
    find, get_registry, install, list_suites, must_find,
};
pub use crate::core::crypto::suites::register_builtin_suites;
pub use crate::core::crypto::xof::HashStreamXof;

// Re-export built-in suites
#[cfg(feature = "ed25519")]
pub use crate::core::crypto::suites::{Ed25519Point, Ed25519Scalar, SuiteEd25519};
