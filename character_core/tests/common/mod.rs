//! Concrete items used by the integration tests

#![allow(dead_code)]

use character_core::{Character, EquipmentSlot, Item, ItemRecord, ItemRef, StatKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Equippable gear with fixed bonuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gear {
    pub name: String,
    pub slots: Vec<EquipmentSlot>,
    pub bonuses: Vec<(StatKind, i32)>,
}

/// Single-use consumable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Potion {
    Health(u32),
    Mana(u32),
    /// Small heal plus +1 constitution for three turns
    Food(u32),
    /// Cures poison
    Antidote,
}

/// Tagged record so the factory can tell item kinds apart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestRecord {
    Gear(Gear),
    Potion { potion: Potion },
}

impl Item for Gear {
    fn name(&self) -> &str {
        &self.name
    }

    fn valid_slots(&self) -> &[EquipmentSlot] {
        &self.slots
    }

    fn stat_bonuses(&self) -> Vec<(StatKind, i32)> {
        self.bonuses.clone()
    }

    fn to_record(&self) -> ItemRecord {
        serde_json::to_value(TestRecord::Gear(self.clone())).unwrap()
    }
}

impl Item for Potion {
    fn name(&self) -> &str {
        match self {
            Potion::Health(_) => "Health Potion",
            Potion::Mana(_) => "Mana Potion",
            Potion::Food(_) => "Bread",
            Potion::Antidote => "Antidote",
        }
    }

    fn valid_slots(&self) -> &[EquipmentSlot] {
        &[]
    }

    fn consumable(&self) -> bool {
        true
    }

    fn use_on(&self, character: &mut Character) -> bool {
        match *self {
            Potion::Health(amount) => character.heal(amount, Some(self.name())) > 0,
            Potion::Mana(amount) => character.restore_mana(amount) > 0,
            Potion::Food(amount) => {
                character.heal(amount / 2, Some(self.name()));
                character
                    .stat_mut(StatKind::Constitution)
                    .add_modifier(1, self.name(), Some(3))
            }
            Potion::Antidote => character.remove_status_effect("Poisoned"),
        }
    }

    fn to_record(&self) -> ItemRecord {
        serde_json::to_value(TestRecord::Potion { potion: self.clone() }).unwrap()
    }
}

pub fn gear(name: &str, slots: &[EquipmentSlot], bonuses: &[(StatKind, i32)]) -> ItemRef {
    Arc::new(Gear {
        name: name.to_string(),
        slots: slots.to_vec(),
        bonuses: bonuses.to_vec(),
    })
}

pub fn potion(potion: Potion) -> ItemRef {
    Arc::new(potion)
}

pub fn item_factory(record: &ItemRecord) -> Result<ItemRef, serde_json::Error> {
    let item: ItemRef = match serde_json::from_value(record.clone())? {
        TestRecord::Gear(gear) => Arc::new(gear),
        TestRecord::Potion { potion } => Arc::new(potion),
    };
    Ok(item)
}
