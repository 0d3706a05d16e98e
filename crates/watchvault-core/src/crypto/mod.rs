//! Cryptographic primitives used by identity derivation.

pub mod hash;

pub use hash::{hash, hash_hex, hasher, HashAlgorithm, Hasher, Sha256Algorithm, ALGORITHM};
