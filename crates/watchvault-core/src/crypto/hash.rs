//! Pure synchronous hashing for vault identity
//!
//! Every token Watchvault derives is a SHA-256 digest rendered as lowercase
//! hex. Hashing is deterministic and side-effect free, so it lives here as a
//! plain trait rather than behind an effect interface.
//!
//! The algorithm is selected once via the `ALGORITHM` constant. Changing it
//! changes every vault token ever derived, which orphans existing vaults, so
//! in practice this is fixed at SHA-256.
//!
//! # Usage
//!
//! ```
//! use watchvault_core::crypto::hash::{hash, hash_hex};
//!
//! let digest = hash(b"hello world");
//! assert_eq!(digest.len(), 32);
//! assert_eq!(hash_hex(b"hello world").len(), 64);
//! ```
//!
//! For incremental hashing:
//!
//! ```
//! use watchvault_core::crypto::hash::{hash, hasher};
//!
//! let mut h = hasher();
//! h.update(b"vault");
//! h.update(b":share");
//! assert_eq!(h.finalize(), hash(b"vault:share"));
//! ```

use sha2::{Digest, Sha256};
use std::fmt;

/// Synchronous trait for cryptographic hashing
///
/// Different inputs should (with overwhelming probability) produce different
/// digests; identical inputs always produce identical digests.
pub trait HashAlgorithm: Send + Sync + fmt::Debug {
    /// Hash arbitrary bytes to a 32-byte digest
    fn hash(&self, data: &[u8]) -> [u8; 32];

    /// Create an incremental hasher for multi-part hashing
    fn hasher(&self) -> Box<dyn Hasher>;
}

/// Trait for incremental hashing of multi-part data
pub trait Hasher: Send {
    /// Update the hasher with more data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hasher and return the 32-byte digest
    fn finalize(self: Box<Self>) -> [u8; 32];
}

/// SHA-256 (NIST FIPS 180-4)
#[derive(Debug, Clone, Copy)]
pub struct Sha256Algorithm;

impl HashAlgorithm for Sha256Algorithm {
    fn hash(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    fn hasher(&self) -> Box<dyn Hasher> {
        Box::new(Sha256Hasher(Sha256::new()))
    }
}

struct Sha256Hasher(Sha256);

impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> [u8; 32] {
        self.0.finalize().into()
    }
}

/// The hash algorithm used for every derived token.
pub const ALGORITHM: Sha256Algorithm = Sha256Algorithm;

/// Hash `data` with the selected algorithm.
#[inline]
pub fn hash(data: &[u8]) -> [u8; 32] {
    ALGORITHM.hash(data)
}

/// Create an incremental hasher for the selected algorithm.
#[inline]
pub fn hasher() -> Box<dyn Hasher> {
    ALGORITHM.hasher()
}

/// Hash `data` and render the digest as 64 lowercase hex characters.
///
/// Each byte becomes two zero-padded digits, concatenated in byte order.
#[inline]
pub fn hash_hex(data: &[u8]) -> String {
    hex::encode(hash(data))
}
