//! # Watchvault Core
//!
//! **Purpose**: Identity derivation and ordering semantics for Watchvault vaults.
//!
//! A vault is a partition of watchlist data (lists, assets, resources) keyed by
//! a token derived from a 12-word secret phrase. There are no accounts: the
//! phrase is hashed client-side and the hash *is* the partition key. A second,
//! one-way token grants read-only access to a vault through a share link.
//!
//! Items inside a vault carry fractional sort keys so that a single
//! drag-and-drop move is persisted with exactly one write.
//!
//! # Architecture Constraints
//!
//! - YES Pure identity derivation (`identity`)
//! - YES Pure fractional-position arithmetic (`ordering`)
//! - YES Effect traits for the persistence collaborators (`effects`)
//! - YES Concurrent batch persistence over those traits (`persist`)
//! - NO effect handler implementations (use `watchvault-effects`)
//! - NO rendering, routing, or network transport

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Hash algorithm selection and hex rendering
pub mod crypto;

/// Secret phrases, vault tokens, and share tokens
pub mod identity;

/// Fractional positions for ordered collections
pub mod ordering;

/// Concurrent persistence of position updates
pub mod persist;

/// Effect traits for persistence collaborators
pub mod effects;

/// Import bundle validation
pub mod import;

/// Configuration loading and validation
pub mod config;

/// Strongly typed identifiers
pub mod types;

/// Unified error types
pub mod errors;

pub use config::{ConfigError, OrderingConfig, WatchvaultConfig};
pub use effects::{PositionStore, ShareRegistry, StoreError};
pub use errors::{Result, WatchvaultError};
pub use identity::{
    derive_share_token, generate_phrase, generate_phrase_with, hash_phrase, normalize_phrase,
    ShareToken, ValidationError, VaultToken, Wordlist, PHRASE_WORD_COUNT,
};
pub use import::{validate_import, ImportBundle, ImportCounts, ImportError};
pub use ordering::{
    append_position, apply_updates, compute_insert_position, min_adjacent_gap,
    needs_renormalization, plan_move, renormalize, sort_by_position, OrderedItem, OrderingError,
    Positioned,
};
pub use persist::persist_positions;
pub use types::{Collection, ItemId, PositionUpdate};
