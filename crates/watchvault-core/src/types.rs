//! Strongly typed identifiers for vault records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an orderable record (list, asset, or resource).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An ordered container kind within a vault.
///
/// Lists are ordered within a vault, assets within a list, and resources
/// (links and images) within an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Named lists owned by a vault
    Lists,
    /// Tickers inside a list
    Assets,
    /// Links and images attached to an asset
    Resources,
}

impl Collection {
    /// Backing-store table name for this collection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Collection::Lists => "lists",
            Collection::Assets => "assets",
            Collection::Resources => "resources",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `{id, position}` write produced by a reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    /// Record being moved
    pub id: ItemId,
    /// New sort key
    pub position: f64,
}

impl PositionUpdate {
    /// Create a new position update.
    pub fn new(id: impl Into<ItemId>, position: f64) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}
