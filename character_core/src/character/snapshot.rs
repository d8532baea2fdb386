//! Snapshot and restore of the full character state

use super::Character;
use crate::config::{CharacterRules, ConfigError};
use crate::equipment::Equipment;
use crate::events::Observers;
use crate::inventory::Inventory;
use crate::item::{ItemRecord, ItemRef};
use crate::stat_block::StatBlock;
use crate::status::StatusEffects;
use crate::types::{CharacterClass, EquipmentSlot, Race, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Serialized form of a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub race: Race,
    pub character_class: CharacterClass,
    pub stats: StatBlock,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub level: u32,
    pub experience: u32,
    pub next_level_exp: u32,
    pub equipment: BTreeMap<EquipmentSlot, Option<ItemRecord>>,
    pub inventory: Vec<ItemRecord>,
    pub skills: Vec<String>,
    pub status_effects: StatusEffects,
    #[serde(default = "crate::config::default_rules")]
    pub rules: CharacterRules,
}

/// Why a record could not be turned back into a character
#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("Failed to decode character JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record carries unusable rules: {0}")]
    Rules(#[from] ConfigError),
    #[error("Level {0} is out of range")]
    InvalidLevel(u32),
    #[error("next_level_exp must be positive")]
    ZeroLevelThreshold,
    #[error("{resource} {value} exceeds maximum {max}")]
    ResourceOverMax {
        resource: &'static str,
        value: u32,
        max: u32,
    },
    #[error("{stat} modifier from {source_name} has zero duration")]
    ZeroModifierDuration { stat: StatKind, source_name: String },
    #[error("Status effect {0} has zero duration")]
    ZeroStatusDuration(String),
    #[error("Inventory holds {len} items but capacity is {capacity}")]
    InventoryOverCapacity { len: usize, capacity: usize },
    #[error("Item factory failed: {0}")]
    Item(String),
    #[error("{item} cannot be equipped to {slot}")]
    InvalidSlot { item: String, slot: EquipmentSlot },
}

impl Character {
    /// Capture every field as a serializable record
    pub fn to_record(&self) -> CharacterRecord {
        CharacterRecord {
            name: self.name.clone(),
            race: self.race,
            character_class: self.class,
            stats: self.stats.clone(),
            health: self.health,
            max_health: self.max_health,
            mana: self.mana,
            max_mana: self.max_mana,
            level: self.level,
            experience: self.experience,
            next_level_exp: self.next_level_exp,
            equipment: self
                .equipment
                .iter()
                .map(|(slot, item)| (slot, item.map(|i| i.to_record())))
                .collect(),
            inventory: self.inventory.iter().map(|i| i.to_record()).collect(),
            skills: self.skills.clone(),
            status_effects: self.status_effects.clone(),
            rules: self.rules.clone(),
        }
    }

    /// Rebuild a character from a record
    ///
    /// The record is validated in full before anything is built; items are
    /// reconstructed by `item_factory`. Observers are not part of the record
    /// and must be attached again.
    pub fn from_record<F, E>(record: CharacterRecord, mut item_factory: F) -> Result<Self, RestoreError>
    where
        F: FnMut(&ItemRecord) -> Result<ItemRef, E>,
        E: fmt::Display,
    {
        validate(&record)?;

        let mut build = |data: &ItemRecord| item_factory(data).map_err(|e| RestoreError::Item(e.to_string()));

        let mut equipment = Equipment::new();
        for (slot, data) in &record.equipment {
            let Some(data) = data else { continue };
            let item = build(data)?;
            if !item.can_equip(*slot) {
                return Err(RestoreError::InvalidSlot {
                    item: item.name().to_string(),
                    slot: *slot,
                });
            }
            equipment.put(*slot, item);
        }

        let mut inventory = Inventory::with_capacity(record.rules.max_inventory_slots);
        for data in &record.inventory {
            // capacity already checked
            inventory.push(build(data)?);
        }

        tracing::debug!(character = %record.name, "Restored character at level {}", record.level);

        Ok(Character {
            name: record.name,
            race: record.race,
            class: record.character_class,
            stats: record.stats,
            health: record.health,
            max_health: record.max_health,
            mana: record.mana,
            max_mana: record.max_mana,
            level: record.level,
            experience: record.experience,
            next_level_exp: record.next_level_exp,
            equipment,
            inventory,
            skills: record.skills,
            status_effects: record.status_effects,
            rules: record.rules,
            observers: Observers::default(),
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_record())
    }

    pub fn from_json<F, E>(json: &str, item_factory: F) -> Result<Self, RestoreError>
    where
        F: FnMut(&ItemRecord) -> Result<ItemRef, E>,
        E: fmt::Display,
    {
        let record: CharacterRecord = serde_json::from_str(json)?;
        Self::from_record(record, item_factory)
    }
}

fn validate(record: &CharacterRecord) -> Result<(), RestoreError> {
    record.rules.validate()?;

    if record.level == 0 || record.level == u32::MAX {
        return Err(RestoreError::InvalidLevel(record.level));
    }
    if record.next_level_exp == 0 {
        return Err(RestoreError::ZeroLevelThreshold);
    }
    if record.health > record.max_health {
        return Err(RestoreError::ResourceOverMax {
            resource: "health",
            value: record.health,
            max: record.max_health,
        });
    }
    if record.mana > record.max_mana {
        return Err(RestoreError::ResourceOverMax {
            resource: "mana",
            value: record.mana,
            max: record.max_mana,
        });
    }

    for (kind, stat) in record.stats.iter() {
        if let Some(m) = stat.modifiers().iter().find(|m| m.duration == Some(0)) {
            return Err(RestoreError::ZeroModifierDuration {
                stat: kind,
                source_name: m.source.clone(),
            });
        }
    }
    if let Some(s) = record.status_effects.iter().find(|s| s.duration == 0) {
        return Err(RestoreError::ZeroStatusDuration(s.effect.clone()));
    }

    let capacity = record.rules.max_inventory_slots;
    if record.inventory.len() > capacity {
        return Err(RestoreError::InventoryOverCapacity {
            len: record.inventory.len(),
            capacity,
        });
    }
    Ok(())
}
