//! Item - The capability contract the engine needs from equipment and consumables
//!
//! The engine never sees concrete item types. Anything that can name its
//! valid slots, stat bonuses and use effect can be equipped, carried and used.

use crate::character::Character;
use crate::types::{EquipmentSlot, StatKind};
use std::fmt;
use std::sync::Arc;

/// Shared handle to an item; identity is the allocation, not the contents
pub type ItemRef = Arc<dyn Item>;

/// Serialized form of an item, opaque to the engine
pub type ItemRecord = serde_json::Value;

pub trait Item: fmt::Debug + Send + Sync {
    /// Display name
    fn name(&self) -> &str;

    /// Slots this item may be equipped into (empty for non-equipment)
    fn valid_slots(&self) -> &[EquipmentSlot];

    /// Stat deltas granted while equipped
    fn stat_bonuses(&self) -> Vec<(StatKind, i32)> {
        Vec::new()
    }

    /// Whether a successful use removes the item from the inventory
    fn consumable(&self) -> bool {
        false
    }

    /// Apply the item's effect, returning whether anything happened
    fn use_on(&self, _character: &mut Character) -> bool {
        false
    }

    /// Serialize for snapshots; reconstructed by the caller's item factory
    fn to_record(&self) -> ItemRecord;

    fn can_equip(&self, slot: EquipmentSlot) -> bool {
        self.valid_slots().contains(&slot)
    }
}

/// Whether two handles point at the same item instance
pub fn same_item(a: &ItemRef, b: &ItemRef) -> bool {
    Arc::ptr_eq(a, b)
}
