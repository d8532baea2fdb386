//! Inventory - Capacity-bounded item list

use crate::item::{same_item, ItemRef};

/// Carried items in pickup order
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<ItemRef>,
    capacity: usize,
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Inventory {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    pub fn contains(&self, item: &ItemRef) -> bool {
        self.position(item).is_some()
    }

    pub fn position(&self, item: &ItemRef) -> Option<usize> {
        self.items.iter().position(|i| same_item(i, item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ItemRef] {
        &self.items
    }

    /// Append if there is room
    pub(crate) fn push(&mut self, item: ItemRef) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the first entry that is this exact item
    pub(crate) fn remove(&mut self, item: &ItemRef) -> bool {
        match self.position(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
