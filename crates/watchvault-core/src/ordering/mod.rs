//! Fractional positions for ordered collections
//!
//! Every list, asset, and resource carries a real-valued `position`. Only the
//! relative order of positions within one container matters. New items are
//! appended at the current collection length; a drag-and-drop move writes a
//! single new position for the moved item, computed from its new neighbours,
//! and leaves every sibling untouched.
//!
//! Repeated midpoints between the same two neighbours eventually run out of
//! `f64` precision. The allocator does not repair this on its own; callers
//! that care can check [`needs_renormalization`] and persist the plan from
//! [`renormalize`].

mod allocator;
mod renormalize;

pub use allocator::{
    append_position, apply_updates, compute_insert_position, plan_move, sort_by_position,
};
pub use renormalize::{min_adjacent_gap, needs_renormalization, renormalize};

use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// Anything that can be ordered by a fractional position.
pub trait Positioned {
    /// Stable identifier of the record
    fn id(&self) -> &ItemId;

    /// Current sort key
    fn position(&self) -> f64;

    /// Overwrite the sort key
    fn set_position(&mut self, position: f64);
}

/// Minimal orderable record, used when the caller has nothing richer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    /// Record identifier
    pub id: ItemId,
    /// Sort key
    pub position: f64,
}

impl OrderedItem {
    /// Create a new ordered item.
    pub fn new(id: impl Into<ItemId>, position: f64) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl Positioned for OrderedItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, position: f64) {
        self.position = position;
    }
}

/// Errors from position arithmetic
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderingError {
    /// Target index lies past the end of the collection
    #[error("Target index {index} is out of bounds for {len} items")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of items the index was applied to
        len: usize,
    },

    /// The moved item is not part of the collection
    #[error("Item {id} is not in the collection")]
    UnknownItem {
        /// Missing identifier
        id: ItemId,
    },

    /// Renormalization stride must be positive and finite
    #[error("Invalid renormalization stride: {stride}")]
    InvalidStride {
        /// Rejected stride
        stride: f64,
    },
}
