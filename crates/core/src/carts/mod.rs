//! Carts
//!
//! Cart line items and reconciliation of two carts into one, for example when
//! an anonymous session's cart is folded into the cart of a user who just
//! signed in.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod metadata;
pub mod table;

pub use metadata::{Metadata, MetadataValue};

/// Serialized names of the fields stored outside the metadata.
const RESERVED_KEYS: [&str; 2] = ["productId", "quantity"];

/// A single line in a shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier, the key used when merging carts
    pub product_id: String,

    /// Quantity; zero or negative values represent removals
    pub quantity: i64,

    /// Any additional fields (variant, price, name, ...)
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl CartItem {
    /// Creates a new cart item without metadata.
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            metadata: Metadata::default(),
        }
    }

    /// Returns the item with the given metadata field set.
    ///
    /// `productId` and `quantity` are item fields rather than metadata, so
    /// those keys are ignored.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        let key = key.into();

        if !RESERVED_KEYS.contains(&key.as_str()) {
            self.metadata.insert(key, value.into());
        }

        self
    }

    /// Returns a metadata field by name.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Folds another line for the same product into this one.
    ///
    /// Quantities are summed. Metadata fields defined on `other` replace ours,
    /// fields only we define are kept.
    fn absorb(&mut self, other: &CartItem) {
        self.quantity = self.quantity.saturating_add(other.quantity);

        self.metadata.extend(
            other
                .metadata
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }

    fn has_positive_quantity(&self) -> bool {
        self.quantity > 0
    }
}

/// Merges an incoming cart into a base cart.
///
/// Each product appears at most once in the result. Lines for the same product
/// have their quantities summed, with incoming metadata taking precedence
/// field by field. Lines that end up with a quantity of zero or less are
/// dropped.
///
/// The order of the returned items is unspecified.
pub fn merge_carts(base: &[CartItem], incoming: &[CartItem]) -> Vec<CartItem> {
    let mut lines: FxHashMap<&str, CartItem> = FxHashMap::default();

    for item in base {
        lines.insert(item.product_id.as_str(), item.clone());
    }

    for item in incoming {
        match lines.entry(item.product_id.as_str()) {
            Entry::Occupied(mut entry) => entry.get_mut().absorb(item),
            Entry::Vacant(entry) => {
                entry.insert(item.clone());
            }
        }
    }

    let candidates = lines.len();

    let merged: Vec<CartItem> = lines
        .into_values()
        .filter(CartItem::has_positive_quantity)
        .collect();

    debug!(
        base = base.len(),
        incoming = incoming.len(),
        merged = merged.len(),
        dropped = candidates - merged.len(),
        "merged carts"
    );

    merged
}
