//! Equipment and inventory management

use super::Character;
use crate::events::CharacterEvent;
use crate::item::ItemRef;
use crate::source::{GearSource, StatSource};
use crate::types::{EquipmentSlot, ParseError};
use thiserror::Error;

/// Why an item could not be equipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error(transparent)]
    UnknownSlot(#[from] ParseError),
    #[error("{item} cannot be equipped to {slot}")]
    InvalidSlot { item: String, slot: EquipmentSlot },
    #[error("{item} is already equipped in {slot}")]
    AlreadyEquipped { item: String, slot: EquipmentSlot },
}

impl Character {
    // === Equipment Methods ===

    /// Equip an item, returning whatever previously occupied the slot
    ///
    /// The displaced item's bonuses are revoked and it is handed back to the
    /// caller rather than stored. If the new item was carried, it leaves the
    /// inventory. Equipping an item into the slot it already occupies is a
    /// no-op returning `Ok(None)`.
    pub fn equip(&mut self, item: ItemRef, slot: EquipmentSlot) -> Result<Option<ItemRef>, EquipError> {
        if !item.can_equip(slot) {
            self.emit(CharacterEvent::EquipRefused {
                item: item.name().to_string(),
                slot,
            });
            return Err(EquipError::InvalidSlot {
                item: item.name().to_string(),
                slot,
            });
        }

        if let Some(current) = self.equipment.slot_of(&item) {
            if current == slot {
                return Ok(None);
            }
            self.emit(CharacterEvent::AlreadyEquipped {
                item: item.name().to_string(),
                slot: current,
            });
            return Err(EquipError::AlreadyEquipped {
                item: item.name().to_string(),
                slot: current,
            });
        }

        let previous = self.equipment.take(slot);
        if let Some(ref old) = previous {
            GearSource::new(slot, old.clone()).revoke(&mut self.stats);
        }

        GearSource::new(slot, item.clone()).apply(&mut self.stats);
        while self.inventory.remove(&item) {}
        self.emit(CharacterEvent::Equipped {
            item: item.name().to_string(),
            slot,
        });
        self.equipment.put(slot, item);

        Ok(previous)
    }

    /// Equip by slot name, e.g. `"main_hand"`
    pub fn equip_named(&mut self, item: ItemRef, slot: &str) -> Result<Option<ItemRef>, EquipError> {
        match slot.parse::<EquipmentSlot>() {
            Ok(slot) => self.equip(item, slot),
            Err(e) => {
                tracing::warn!(character = %self.name, "Invalid equipment slot: {}", slot);
                Err(e.into())
            }
        }
    }

    /// Unequip an item from a slot, returning it if present
    ///
    /// The item goes back into the inventory when there is room. With a full
    /// inventory it is still returned, but only the caller holds it now.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemRef> {
        let Some(item) = self.equipment.take(slot) else {
            self.emit(CharacterEvent::SlotEmpty { slot });
            return None;
        };

        GearSource::new(slot, item.clone()).revoke(&mut self.stats);

        let name = item.name().to_string();
        if self.inventory.push(item.clone()) {
            self.emit(CharacterEvent::Unequipped { item: name, slot });
        } else {
            self.emit(CharacterEvent::ItemDropped { item: name, slot });
        }
        Some(item)
    }

    // === Inventory Methods ===

    /// Carry an item if there is room
    ///
    /// Equipped items and handles already in the inventory are refused.
    pub fn add_to_inventory(&mut self, item: ItemRef) -> bool {
        if let Some(slot) = self.equipment.slot_of(&item) {
            self.emit(CharacterEvent::AlreadyEquipped {
                item: item.name().to_string(),
                slot,
            });
            return false;
        }
        if self.inventory.contains(&item) {
            self.emit(CharacterEvent::AlreadyCarried {
                item: item.name().to_string(),
            });
            return false;
        }

        let name = item.name().to_string();
        if self.inventory.push(item) {
            self.emit(CharacterEvent::ItemAdded { item: name });
            true
        } else {
            self.emit(CharacterEvent::InventoryFull { item: name });
            false
        }
    }

    /// Drop the first inventory entry that is this exact item
    pub fn remove_from_inventory(&mut self, item: &ItemRef) -> bool {
        let name = item.name().to_string();
        if self.inventory.remove(item) {
            self.emit(CharacterEvent::ItemRemoved { item: name });
            true
        } else {
            self.emit(CharacterEvent::ItemNotFound { item: name });
            false
        }
    }

    /// Use a carried item; consumables are removed after a successful use
    pub fn use_item(&mut self, item: &ItemRef) -> bool {
        let name = item.name().to_string();
        if !self.inventory.contains(item) {
            self.emit(CharacterEvent::ItemNotFound { item: name });
            return false;
        }

        if !item.use_on(self) {
            self.emit(CharacterEvent::ItemUseFailed { item: name });
            return false;
        }

        let consumed = item.consumable();
        if consumed {
            self.inventory.remove(item);
        }
        self.emit(CharacterEvent::ItemUsed { item: name, consumed });
        true
    }
}
