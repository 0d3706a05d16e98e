//! In-memory share-token registry

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use watchvault_core::{derive_share_token, ShareRegistry, ShareToken, StoreError, VaultToken};

/// Share lookup table keyed by vault token
///
/// A reverse index answers `resolve` without scanning.
#[derive(Clone, Default)]
pub struct MemoryShareRegistry {
    inner: Arc<RwLock<Tables>>,
}

#[derive(Default)]
struct Tables {
    by_vault: HashMap<VaultToken, ShareToken>,
    by_share: HashMap<ShareToken, VaultToken>,
}

impl MemoryShareRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered vaults
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_vault.len()
    }

    /// Whether no vault is registered
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.by_vault.is_empty()
    }
}

#[async_trait]
impl ShareRegistry for MemoryShareRegistry {
    async fn register(&self, vault: &VaultToken) -> Result<ShareToken, StoreError> {
        let mut tables = self.inner.write().await;
        if let Some(existing) = tables.by_vault.get(vault) {
            return Ok(existing.clone());
        }

        let share = derive_share_token(vault);
        tables.by_vault.insert(vault.clone(), share.clone());
        tables.by_share.insert(share.clone(), vault.clone());

        tracing::info!(
            vault = vault.short(),
            share = share.short(),
            "Registered share token"
        );
        Ok(share)
    }

    async fn resolve(&self, share: &ShareToken) -> Result<Option<VaultToken>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.by_share.get(share).cloned())
    }

    async fn revoke(&self, vault: &VaultToken) -> Result<bool, StoreError> {
        let mut tables = self.inner.write().await;
        match tables.by_vault.remove(vault) {
            Some(share) => {
                tables.by_share.remove(&share);
                tracing::info!(vault = vault.short(), "Revoked share token");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
