//! In-memory position storage handler

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use watchvault_core::{Collection, ItemId, OrderedItem, PositionStore, StoreError};

type Rows = HashMap<Collection, HashMap<ItemId, f64>>;

/// In-memory position store keyed by collection and item id
///
/// Cloning shares the underlying rows.
#[derive(Clone, Default)]
pub struct MemoryPositionStore {
    rows: Arc<RwLock<Rows>>,
    failing: Arc<RwLock<HashSet<ItemId>>>,
}

impl MemoryPositionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a row
    pub async fn insert(&self, collection: Collection, id: impl Into<ItemId>, position: f64) {
        let mut rows = self.rows.write().await;
        rows.entry(collection)
            .or_default()
            .insert(id.into(), position);
    }

    /// Append rows at creation positions `0, 1, 2, …`
    pub async fn seed<I, S>(&self, collection: Collection, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        let mut rows = self.rows.write().await;
        let table = rows.entry(collection).or_default();
        for id in ids {
            let position = watchvault_core::append_position(table.len());
            table.insert(id.into(), position);
        }
    }

    /// Stored position of one row
    pub async fn position_of(&self, collection: Collection, id: &ItemId) -> Option<f64> {
        let rows = self.rows.read().await;
        rows.get(&collection).and_then(|t| t.get(id)).copied()
    }

    /// All rows of a collection, sorted by position
    pub async fn snapshot(&self, collection: Collection) -> Vec<OrderedItem> {
        let rows = self.rows.read().await;
        let mut items: Vec<OrderedItem> = rows
            .get(&collection)
            .map(|table| {
                table
                    .iter()
                    .map(|(id, position)| OrderedItem::new(id.clone(), *position))
                    .collect()
            })
            .unwrap_or_default();
        watchvault_core::sort_by_position(&mut items);
        items
    }

    /// Make every future update of `id` fail with a backend error
    pub async fn fail_updates_for(&self, id: impl Into<ItemId>) {
        self.failing.write().await.insert(id.into());
    }
}

#[async_trait]
impl PositionStore for MemoryPositionStore {
    async fn update_position(
        &self,
        collection: Collection,
        id: &ItemId,
        position: f64,
    ) -> Result<(), StoreError> {
        if self.failing.read().await.contains(id) {
            return Err(StoreError::Backend {
                message: format!("injected failure for {id}"),
            });
        }

        let mut rows = self.rows.write().await;
        let slot = rows
            .get_mut(&collection)
            .and_then(|table| table.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        *slot = position;

        tracing::trace!(collection = %collection, id = %id, position, "Updated position");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_assigns_creation_positions() {
        let store = MemoryPositionStore::new();
        store.seed(Collection::Lists, ["a", "b", "c"]).await;
        let positions: Vec<f64> = store
            .snapshot(Collection::Lists)
            .await
            .iter()
            .map(|i| i.position)
            .collect();
        assert_eq!(positions, vec![0.0, 1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_update_unknown_row() {
        let store = MemoryPositionStore::new();
        let err = store
            .update_position(Collection::Assets, &ItemId::new("x"), 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryPositionStore::new();
        store.insert(Collection::Lists, "same", 0.0).await;
        store.insert(Collection::Assets, "same", 0.0).await;
        store
            .update_position(Collection::Assets, &ItemId::new("same"), 9.0)
            .await
            .unwrap();
        assert_eq!(
            store.position_of(Collection::Lists, &ItemId::new("same")).await,
            Some(0.0)
        );
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let store = MemoryPositionStore::new();
        store.insert(Collection::Lists, "a", 0.0).await;
        store.fail_updates_for("a").await;
        assert!(store
            .update_position(Collection::Lists, &ItemId::new("a"), 1.0)
            .await
            .is_err());
        assert_eq!(
            store.position_of(Collection::Lists, &ItemId::new("a")).await,
            Some(0.0)
        );
    }
}
