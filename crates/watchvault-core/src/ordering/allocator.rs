use super::{OrderingError, Positioned};
use crate::types::{ItemId, PositionUpdate};
use std::collections::HashMap;

/// Position for an item created at the end of a collection of `len` items.
pub fn append_position(len: usize) -> f64 {
    len as f64
}

/// Sort ascending by position; ties keep their relative order.
pub fn sort_by_position<T: Positioned>(items: &mut [T]) {
    items.sort_by(|a, b| a.position().total_cmp(&b.position()));
}

/// Position for an item landing at `target_index` of `sorted_items`.
///
/// `sorted_items` must be sorted ascending and must not contain the item
/// being moved. Index 0 lands before everything, index `len` after
/// everything, anything else halfway between its two neighbours.
pub fn compute_insert_position<T: Positioned>(
    sorted_items: &[T],
    target_index: usize,
) -> Result<f64, OrderingError> {
    let len = sorted_items.len();
    if target_index > len {
        return Err(OrderingError::IndexOutOfBounds {
            index: target_index,
            len,
        });
    }

    if len == 0 {
        return Ok(append_position(0));
    }

    if target_index == 0 {
        return Ok(sorted_items[0].position() - 1.0);
    }

    if target_index == len {
        return Ok(sorted_items[len - 1].position() + 1.0);
    }

    let before = sorted_items[target_index - 1].position();
    let after = sorted_items[target_index].position();
    Ok((before + after) / 2.0)
}

/// Compute the single write for dragging `moved` to `target_index`.
///
/// `items` is the container as the user sees it (any order, including the
/// moved item). `target_index` is the final index of the moved item in the
/// reordered collection.
pub fn plan_move<T: Positioned + Clone>(
    items: &[T],
    moved: &ItemId,
    target_index: usize,
) -> Result<PositionUpdate, OrderingError> {
    let mut rest: Vec<T> = items.iter().filter(|i| i.id() != moved).cloned().collect();
    if rest.len() == items.len() {
        return Err(OrderingError::UnknownItem { id: moved.clone() });
    }
    sort_by_position(&mut rest);

    let position = compute_insert_position(&rest, target_index)?;
    Ok(PositionUpdate {
        id: moved.clone(),
        position,
    })
}

/// Apply updates to an in-memory view and re-sort it.
///
/// Used for the optimistic half of a reorder: the caller updates its own
/// view before persistence resolves. Updates for unknown ids are ignored.
pub fn apply_updates<T: Positioned>(items: &mut [T], updates: &[PositionUpdate]) {
    let by_id: HashMap<&ItemId, f64> = updates.iter().map(|u| (&u.id, u.position)).collect();
    for item in items.iter_mut() {
        if let Some(position) = by_id.get(item.id()) {
            item.set_position(*position);
        }
    }
    sort_by_position(items);
}
