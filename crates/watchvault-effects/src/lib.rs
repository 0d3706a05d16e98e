//! Watchvault Effects
//!
//! Handler implementations of the effect traits declared in
//! `watchvault-core`. The in-memory handlers back tests, the CLI, and any
//! deployment that does not need durable storage.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Position storage handlers
pub mod storage;

/// Share-token lookup handlers
pub mod share;

pub use share::MemoryShareRegistry;
pub use storage::MemoryPositionStore;
