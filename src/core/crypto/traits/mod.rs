/*!
Capability traits for cryptographic suites.

A suite bundles five capabilities: encoding, group arithmetic, hashing,
extendable-output functions and randomness.
*/

pub mod encoding;
pub mod group;
pub mod hash;
pub mod random;
pub mod suite;

// Re-export core traits for easier access
pub use encoding::{Encoding, Marshaling};
pub use group::{Group, GroupResult, Point, Scalar};
pub use hash::{HashFactory, Xof, XofFactory};
pub use random::Random;
pub use suite::Suite;
