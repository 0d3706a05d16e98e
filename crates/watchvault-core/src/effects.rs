//! Effect traits for the persistence collaborators
//!
//! The hosted database is reached only through these traits. Implementations
//! live in `watchvault-effects`; production deployments wire in a database
//! client behind the same signatures.

use crate::identity::{ShareToken, VaultToken};
use crate::types::{Collection, ItemId};
use async_trait::async_trait;

/// Errors surfaced by a persistence backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No row with this id exists in the collection
    #[error("{collection} item not found: {id}")]
    NotFound {
        /// Collection that was targeted
        collection: String,
        /// Identifier that was missing
        id: String,
    },

    /// The backend refused the write (policy, constraint, auth)
    #[error("Update rejected by backend: {message}")]
    Rejected {
        /// Backend-provided reason
        message: String,
    },

    /// Transport or backend failure
    #[error("Storage backend error: {message}")]
    Backend {
        /// Backend-provided reason
        message: String,
    },
}

/// Writes sort keys for individual records.
///
/// One call updates exactly one row. No reads, no version checks: the last
/// writer wins.
#[async_trait]
pub trait PositionStore: Send + Sync {
    /// Set `position` on record `id` of `collection`
    async fn update_position(
        &self,
        collection: Collection,
        id: &ItemId,
        position: f64,
    ) -> Result<(), StoreError>;
}

/// Lookup table from share token to vault token.
///
/// Resolution only runs share → vault. There is deliberately no operation
/// that goes the other way without already holding the vault token.
#[async_trait]
pub trait ShareRegistry: Send + Sync {
    /// Derive the share token for `vault` and record the mapping.
    ///
    /// Registering the same vault twice returns the same token.
    async fn register(&self, vault: &VaultToken) -> Result<ShareToken, StoreError>;

    /// Resolve a share token to the vault it grants read access to.
    async fn resolve(&self, share: &ShareToken) -> Result<Option<VaultToken>, StoreError>;

    /// Drop the mapping for `vault`; returns whether one existed.
    async fn revoke(&self, vault: &VaultToken) -> Result<bool, StoreError>;
}
