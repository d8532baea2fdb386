//! character_core - Character state engine for role-playing games
//!
//! This library provides:
//! - Stat: An ability score with stacked permanent and timed modifiers
//! - Character: Race/class bonuses, leveling, health and mana, equipment,
//!   inventory, status effects and per-turn ticking
//! - CharacterFactory: Characters with randomized name, race or class
//! - Snapshots: Full serialization through an injected item factory

pub mod character;
pub mod config;
pub mod equipment;
pub mod events;
pub mod factory;
pub mod inventory;
pub mod item;
pub mod prelude;
pub mod reward;
pub mod source;
pub mod stat_block;
pub mod status;
pub mod types;

// Re-export core types for convenience
pub use character::{Character, CharacterRecord, Combatant, EquipError, RestoreError};
pub use config::{default_rules, CharacterRules, ConfigError};
pub use equipment::Equipment;
pub use events::{CharacterEvent, CharacterObserver, EventLog};
pub use factory::CharacterFactory;
pub use inventory::Inventory;
pub use item::{Item, ItemRecord, ItemRef};
pub use reward::{RewardGrant, RewardItem, RewardOutcome};
pub use source::{ClassBonus, GearSource, LevelBonus, RacialBonus, StatSource};
pub use stat_block::{Modifier, Stat, StatBlock};
pub use status::{StatusEffect, StatusEffects};
pub use types::{CharacterClass, EquipmentSlot, ParseError, Race, StatKind};
