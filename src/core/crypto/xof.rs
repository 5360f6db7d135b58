/*!
Hash-stream extendable-output function.

Input is absorbed into SHA-512. On the first read the digest is turned
into a stream key with HKDF-SHA256 and output is taken from a ChaCha20
keystream under that key.
*/

use hkdf::Hkdf;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

use crate::core::constants::{labels, sizes};
use crate::core::crypto::traits::Xof;
use crate::core::error::XofError;

#[derive(Clone)]
enum XofState {
    Absorbing(Sha512),
    Squeezing(ChaCha20Rng),
}

/// XOF built from SHA-512, HKDF-SHA256 and ChaCha20
#[derive(Clone)]
pub struct HashStreamXof {
    state: XofState,
}

impl HashStreamXof {
    /// Create an XOF that has absorbed `seed`
    pub fn new(seed: &[u8]) -> Self {
        Self {
            state: XofState::Absorbing(Sha512::new_with_prefix(seed)),
        }
    }

    /// Whether output has been read since the last (re)seed
    pub fn is_squeezing(&self) -> bool {
        matches!(self.state, XofState::Squeezing(_))
    }

    fn stream(&mut self) -> Result<&mut ChaCha20Rng, XofError> {
        if let XofState::Absorbing(hasher) = &self.state {
            let mut key = derive_stream_key(hasher.clone())?;
            self.state = XofState::Squeezing(ChaCha20Rng::from_seed(key));
            key.zeroize();
        }

        match &mut self.state {
            XofState::Squeezing(rng) => Ok(rng),
            XofState::Absorbing(_) => Err(XofError::KeyDerivationFailed),
        }
    }
}

fn derive_stream_key(hasher: Sha512) -> Result<[u8; sizes::XOF_KEY_SIZE], XofError> {
    let mut ikm = hasher.finalize();
    let hk = Hkdf::<Sha256>::new(Some(labels::XOF_SALT), ikm.as_slice());
    ikm.as_mut_slice().zeroize();

    let mut key = [0u8; sizes::XOF_KEY_SIZE];
    hk.expand(labels::XOF_STREAM_KEY, &mut key)
        .map_err(|_| XofError::KeyDerivationFailed)?;
    Ok(key)
}

impl Xof for HashStreamXof {
    fn absorb(&mut self, data: &[u8]) -> Result<(), XofError> {
        match &mut self.state {
            XofState::Absorbing(hasher) => {
                Digest::update(hasher, data);
                Ok(())
            }
            XofState::Squeezing(_) => Err(XofError::AbsorbAfterSqueeze),
        }
    }

    fn squeeze(&mut self, out: &mut [u8]) -> Result<(), XofError> {
        self.stream()?.fill_bytes(out);
        Ok(())
    }

    fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), XofError> {
        if dst.len() != src.len() {
            return Err(XofError::LengthMismatch {
                dst: dst.len(),
                src: src.len(),
            });
        }

        self.squeeze(dst)?;
        for (d, s) in dst.iter_mut().zip(src) {
            *d ^= s;
        }
        Ok(())
    }

    fn reseed(&mut self) -> Result<(), XofError> {
        let mut key = [0u8; sizes::XOF_KEY_SIZE];
        self.squeeze(&mut key)?;
        self.state = XofState::Absorbing(Sha512::new_with_prefix(key));
        key.zeroize();
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Xof> {
        Box::new(self.clone())
    }
}
