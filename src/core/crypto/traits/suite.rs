/*!
The combined capability set every registered suite implements.
*/

use std::fmt;

use crate::core::crypto::traits::{Encoding, Group, HashFactory, Random, XofFactory};

/// A cryptographic suite: encoding, group, hash, XOF and randomness
///
/// `Display` is the suite's self-reported name; the registry uses it,
/// case-folded, as the lookup key.
pub trait Suite:
    Encoding + Group + HashFactory + XofFactory + Random + fmt::Display + fmt::Debug + Send + Sync
{
    /// Self-reported name
    fn name(&self) -> String {
        self.to_string()
    }
}
