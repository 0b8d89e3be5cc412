//! Counted multiset of item IDs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::ItemId;
use crate::item::Item;

/// A character's bag: item IDs with quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<ItemId, u32>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an item, ignoring stack limits.
    ///
    /// Use [`Inventory::add_item`] when the definition is at hand.
    pub fn add(&mut self, item: impl Into<ItemId>, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let count = self.items.entry(item.into()).or_insert(0);
        *count = count.saturating_add(quantity);
    }

    /// Add up to `quantity` of a catalog item, capped at its `max_stack`.
    ///
    /// Returns how many were actually added.
    pub fn add_item(&mut self, item: &Item, quantity: u32) -> u32 {
        let added = quantity.min(self.room_for(item));
        if added < quantity {
            tracing::debug!(item = %item.id, max = item.max_stack, dropped = quantity - added, "stack full");
        }
        self.add(item.id.clone(), added);
        added
    }

    /// How many more of an item fit before its stack is full.
    pub fn room_for(&self, item: &Item) -> u32 {
        item.max_stack.saturating_sub(self.count(item.id.as_str()))
    }

    /// Remove `quantity` of an item, dropping the entry at zero.
    ///
    /// Fails without changes if fewer than `quantity` are held.
    pub fn remove(&mut self, item: &str, quantity: u32) -> CoreResult<()> {
        let available = self.count(item);
        if available < quantity {
            return Err(CoreError::MissingItem {
                item: ItemId::new(item),
                required: quantity,
                available,
            });
        }
        if available == quantity {
            self.items.remove(item);
        } else if let Some(count) = self.items.get_mut(item) {
            *count -= quantity;
        }
        Ok(())
    }

    /// How many of an item are held.
    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Returns true if at least `quantity` of the item are held.
    pub fn has(&self, item: &str, quantity: u32) -> bool {
        self.count(item) >= quantity
    }

    /// Iterate over `(item, quantity)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.items.iter().map(|(id, n)| (id, *n))
    }

    /// Number of distinct items held.
    pub fn distinct(&self) -> usize {
        self.items.len()
    }

    /// Total number of items across all stacks.
    pub fn total(&self) -> u64 {
        self.items.values().map(|n| u64::from(*n)).sum()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
