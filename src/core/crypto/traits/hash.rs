/*!
Traits for hash functions and extendable-output functions.
*/

use sha2::digest::DynDigest;

use crate::core::error::XofError;

/// Hash capability of a suite
pub trait HashFactory {
    /// New instance of the suite's hash function
    fn hash(&self) -> Box<dyn DynDigest>;
}

/// Extendable-output function
///
/// Input is absorbed first; once output has been squeezed, further input
/// is rejected until `reseed` is called.
pub trait Xof: Send {
    /// Absorb more input
    fn absorb(&mut self, data: &[u8]) -> Result<(), XofError>;

    /// Fill `out` with the next bytes of output
    fn squeeze(&mut self, out: &mut [u8]) -> Result<(), XofError>;

    /// XOR `src` with the next bytes of output into `dst`
    fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), XofError>;

    /// Re-key from the current output so input can be absorbed again
    fn reseed(&mut self) -> Result<(), XofError>;

    /// Clone the current state into a new box
    fn clone_box(&self) -> Box<dyn Xof>;
}

/// XOF capability of a suite
pub trait XofFactory {
    /// New XOF that has absorbed `seed`
    fn xof(&self, seed: &[u8]) -> Box<dyn Xof>;
}

impl Clone for Box<dyn Xof> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
