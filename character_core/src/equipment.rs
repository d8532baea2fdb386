//! Equipment - One optional item per fixed slot

use crate::item::{same_item, ItemRef};
use crate::types::EquipmentSlot;

/// Equipped items by slot
#[derive(Debug, Clone, Default)]
pub struct Equipment {
    slots: [Option<ItemRef>; EquipmentSlot::COUNT],
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the item equipped in a slot
    pub fn get(&self, slot: EquipmentSlot) -> Option<&ItemRef> {
        self.slots[slot.index()].as_ref()
    }

    pub fn is_empty(&self, slot: EquipmentSlot) -> bool {
        self.slots[slot.index()].is_none()
    }

    /// Slot currently holding this exact item, if any
    pub fn slot_of(&self, item: &ItemRef) -> Option<EquipmentSlot> {
        self.iter()
            .find(|(_, equipped)| equipped.is_some_and(|e| same_item(e, item)))
            .map(|(slot, _)| slot)
    }

    /// Every slot with its contents, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, Option<&ItemRef>)> {
        EquipmentSlot::all()
            .iter()
            .map(move |&slot| (slot, self.slots[slot.index()].as_ref()))
    }

    /// Only the occupied slots
    pub fn equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemRef)> {
        self.iter().filter_map(|(slot, item)| item.map(|i| (slot, i)))
    }

    /// Put an item into a slot, returning the previous occupant
    pub(crate) fn put(&mut self, slot: EquipmentSlot, item: ItemRef) -> Option<ItemRef> {
        self.slots[slot.index()].replace(item)
    }

    /// Empty a slot, returning what was there
    pub(crate) fn take(&mut self, slot: EquipmentSlot) -> Option<ItemRef> {
        self.slots[slot.index()].take()
    }
}
