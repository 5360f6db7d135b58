/*!
Error handling for the suite registry and the suite capabilities.

Each capability area has its own small error enum; the crate-wide
`Error` wraps them so callers can use a single `Result` with `?`.
*/

use std::io;
use thiserror::Error;

/// Result type for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for suite operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading or writing encoded objects
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Registry lookup or installation error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Malformed encoding
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Group arithmetic error
    #[error("Group operation failed: {0}")]
    Group(#[from] GroupError),

    /// Extendable-output function error
    #[error("XOF operation failed: {0}")]
    Xof(#[from] XofError),
}

/// Registry errors
///
/// `UnknownSuite` carries no context so callers can compare against it
/// directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No suite is registered under the requested name
    #[error("unknown suite")]
    UnknownSuite,

    /// The process-wide registry was already installed or already in use
    #[error("suite registry already installed")]
    AlreadyInstalled,
}

/// Errors decoding marshaled scalars, points and integers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Input has the wrong length for the object being decoded
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        expected: usize,
        actual: usize,
    },

    /// Input is not the canonical encoding of its value
    #[error("non-canonical encoding")]
    NonCanonical,

    /// Input does not decode to a point on the curve
    #[error("invalid point encoding")]
    InvalidPoint,
}

/// Group arithmetic errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// An operand belongs to a different group implementation
    #[error("element belongs to a different group")]
    ForeignElement,

    /// Inversion or division by zero
    #[error("scalar is not invertible")]
    NonInvertible,
}

/// Extendable-output function errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum XofError {
    /// Input was written after output was read; call `reseed` first
    #[error("cannot absorb after squeezing")]
    AbsorbAfterSqueeze,

    /// Destination and source buffers differ in length
    #[error("buffer length mismatch: dst {dst} bytes, src {src} bytes")]
    LengthMismatch {
        dst: usize,
        src: usize,
    },

    /// Stream key derivation failed
    #[error("key derivation failed")]
    KeyDerivationFailed,
}

/// Convert from Error to io::Error (for compatibility)
impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(io_error) => io_error,
            Error::Registry(err) => io::Error::new(io::ErrorKind::NotFound, err),
            Error::Encoding(err) => io::Error::new(io::ErrorKind::InvalidData, err),
            Error::Group(err) => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::Xof(err) => io::Error::other(err),
        }
    }
}
