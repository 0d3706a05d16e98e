//! Concurrent persistence of position updates
//!
//! After a drag ends, the caller applies the new position(s) to its own view
//! and hands the same updates to [`persist_positions`]. All writes are issued
//! at once and every one is driven to completion, even after a sibling has
//! failed. The first failure in update order is returned; there is no retry,
//! no rollback, and no report of which writes did land, so a failed call
//! leaves the backing store and the optimistic view diverged until the next
//! full refetch.

use crate::effects::{PositionStore, StoreError};
use crate::types::{Collection, PositionUpdate};
use futures::future::join_all;

/// Write every `{id, position}` pair to `collection`, concurrently.
pub async fn persist_positions<S>(
    store: &S,
    collection: Collection,
    updates: &[PositionUpdate],
) -> Result<(), StoreError>
where
    S: PositionStore + ?Sized,
{
    if updates.is_empty() {
        return Ok(());
    }

    tracing::debug!(
        collection = %collection,
        count = updates.len(),
        "Persisting position updates"
    );

    let writes = updates
        .iter()
        .map(|update| store.update_position(collection, &update.id, update.position));

    let results = join_all(writes).await;
    let failed = results.iter().filter(|r| r.is_err()).count();

    match results.into_iter().find_map(Result::err) {
        Some(e) => {
            tracing::warn!(
                collection = %collection,
                count = updates.len(),
                failed,
                error = %e,
                "Position persistence failed"
            );
            Err(e)
        }
        None => Ok(()),
    }
}
