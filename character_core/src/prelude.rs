//! Prelude module for convenient imports
//!
//! ```rust
//! use character_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, Combatant, EquipError};
pub use crate::stat_block::{Modifier, Stat, StatBlock};
pub use crate::types::{CharacterClass, EquipmentSlot, Race, StatKind};

// Items
pub use crate::item::{Item, ItemRecord, ItemRef};

// Events
pub use crate::events::{CharacterEvent, CharacterObserver, EventLog};

// Construction
pub use crate::config::CharacterRules;
pub use crate::factory::CharacterFactory;
pub use crate::reward::RewardGrant;
