/*!
Trait for the randomness capability.
*/

use rand::RngCore;

/// Randomness capability of a suite
pub trait Random {
    /// Cryptographically secure random stream
    fn random_stream(&self) -> Box<dyn RngCore + Send>;
}
