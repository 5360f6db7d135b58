/*!
Constants for the built-in suites.
*/

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names the built-in suites report about themselves
pub mod names {
    /// Edwards25519 suite
    pub const ED25519: &str = "Ed25519";
}

/// Sizes of cryptographic values
pub mod sizes {
    /// Ed25519 group sizes
    pub mod ed25519 {
        /// Marshaled scalar size (little-endian, reduced mod the group order)
        pub const SCALAR_SIZE: usize = 32;

        /// Marshaled point size (compressed Edwards y with x sign bit)
        pub const POINT_SIZE: usize = 32;

        /// Bytes drawn from the random stream when picking a scalar
        pub const WIDE_SCALAR_SIZE: usize = 64;
    }

    /// Size of the stream key derived by the hash-stream XOF
    pub const XOF_KEY_SIZE: usize = 32;
}

/// Domain separation labels
pub mod labels {
    /// HKDF salt for the hash-stream XOF
    pub const XOF_SALT: &[u8] = b"crypto-suites xof v1";

    /// HKDF info for the hash-stream XOF stream key
    pub const XOF_STREAM_KEY: &[u8] = b"stream key";
}
