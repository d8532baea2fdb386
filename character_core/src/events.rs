//! Character events - Diagnostic trace of everything that happens to a character
//!
//! Events are always written to `tracing` and then handed to any attached
//! [`CharacterObserver`]. Nothing in the engine reads them back.

use crate::types::{CharacterClass, EquipmentSlot, Race, StatKind};
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterEvent {
    Created {
        race: Race,
        class: CharacterClass,
    },
    ExperienceGained {
        amount: u32,
        experience: u32,
        next_level_exp: u32,
    },
    LeveledUp {
        level: u32,
        max_health: u32,
        max_mana: u32,
    },
    DamageTaken {
        amount: u32,
        source: Option<String>,
        health: u32,
        max_health: u32,
    },
    Defeated,
    Healed {
        amount: u32,
        source: Option<String>,
        health: u32,
        max_health: u32,
    },
    ManaSpent {
        amount: u32,
        mana: u32,
    },
    ManaInsufficient {
        requested: u32,
        available: u32,
    },
    ManaRestored {
        amount: u32,
        mana: u32,
    },
    Equipped {
        item: String,
        slot: EquipmentSlot,
    },
    EquipRefused {
        item: String,
        slot: EquipmentSlot,
    },
    Unequipped {
        item: String,
        slot: EquipmentSlot,
    },
    /// Unequipped with a full inventory; the item is only held by the caller now
    ItemDropped {
        item: String,
        slot: EquipmentSlot,
    },
    SlotEmpty {
        slot: EquipmentSlot,
    },
    AlreadyEquipped {
        item: String,
        slot: EquipmentSlot,
    },
    ItemAdded {
        item: String,
    },
    AlreadyCarried {
        item: String,
    },
    InventoryFull {
        item: String,
    },
    ItemRemoved {
        item: String,
    },
    ItemNotFound {
        item: String,
    },
    ItemUsed {
        item: String,
        consumed: bool,
    },
    ItemUseFailed {
        item: String,
    },
    ModifierExpired {
        stat: StatKind,
        value: i32,
        source: String,
    },
    StatusEffectAdded {
        effect: String,
        source: String,
        duration: u32,
    },
    StatusEffectRemoved {
        effect: String,
    },
    StatusEffectMissing {
        effect: String,
    },
    StatusEffectExpired {
        effect: String,
        source: String,
    },
}

/// How loudly an event is traced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

impl CharacterEvent {
    pub fn severity(&self) -> Severity {
        use CharacterEvent::*;
        match self {
            ModifierExpired { .. } => Severity::Debug,
            ManaInsufficient { .. }
            | EquipRefused { .. }
            | ItemDropped { .. }
            | SlotEmpty { .. }
            | AlreadyEquipped { .. }
            | AlreadyCarried { .. }
            | InventoryFull { .. }
            | ItemNotFound { .. }
            | ItemUseFailed { .. }
            | StatusEffectMissing { .. } => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

fn or_nothing(source: &Option<String>) -> String {
    source.as_ref().map(|s| format!(" from {}", s)).unwrap_or_default()
}

impl fmt::Display for CharacterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CharacterEvent::*;
        match self {
            Created { race, class } => write!(f, "created as {} {}", race, class),
            ExperienceGained { amount, experience, next_level_exp } => {
                write!(f, "gained {} experience ({}/{})", amount, experience, next_level_exp)
            }
            LeveledUp { level, max_health, max_mana } => write!(
                f,
                "reached level {} (health {}, mana {})",
                level, max_health, max_mana
            ),
            DamageTaken { amount, source, health, max_health } => write!(
                f,
                "took {} damage{} ({}/{})",
                amount,
                or_nothing(source),
                health,
                max_health
            ),
            Defeated => write!(f, "was defeated"),
            Healed { amount, source, health, max_health } => write!(
                f,
                "healed {}{} ({}/{})",
                amount,
                or_nothing(source),
                health,
                max_health
            ),
            ManaSpent { amount, mana } => write!(f, "spent {} mana ({} left)", amount, mana),
            ManaInsufficient { requested, available } => write!(
                f,
                "tried to spend {} mana but only has {}",
                requested, available
            ),
            ManaRestored { amount, mana } => write!(f, "restored {} mana ({})", amount, mana),
            Equipped { item, slot } => write!(f, "equipped {} to {}", item, slot),
            EquipRefused { item, slot } => write!(f, "cannot equip {} to {}", item, slot),
            Unequipped { item, slot } => write!(f, "unequipped {} from {} to inventory", item, slot),
            ItemDropped { item, slot } => write!(
                f,
                "unequipped {} from {} but inventory is full",
                item, slot
            ),
            SlotEmpty { slot } => write!(f, "has nothing equipped in {}", slot),
            AlreadyEquipped { item, slot } => write!(f, "already has {} equipped in {}", item, slot),
            ItemAdded { item } => write!(f, "added {} to inventory", item),
            AlreadyCarried { item } => write!(f, "already carries {}", item),
            InventoryFull { item } => write!(f, "cannot add {} to inventory: full", item),
            ItemRemoved { item } => write!(f, "removed {} from inventory", item),
            ItemNotFound { item } => write!(f, "does not carry {}", item),
            ItemUsed { item, consumed: true } => write!(f, "used and consumed {}", item),
            ItemUsed { item, consumed: false } => write!(f, "used {}", item),
            ItemUseFailed { item } => write!(f, "could not use {}", item),
            ModifierExpired { stat, value, source } => {
                write!(f, "{} modifier {} from {} expired", stat, value, source)
            }
            StatusEffectAdded { effect, source, duration } => write!(
                f,
                "gained status effect {} from {} for {} turns",
                effect, source, duration
            ),
            StatusEffectRemoved { effect } => write!(f, "lost status effect {}", effect),
            StatusEffectMissing { effect } => write!(f, "does not have status effect {}", effect),
            StatusEffectExpired { effect, source } => {
                write!(f, "status effect {} from {} expired", effect, source)
            }
        }
    }
}

/// Receives every event a character emits
pub trait CharacterObserver: Send + Sync {
    fn on_event(&self, character: &str, event: &CharacterEvent);
}

/// Observer that keeps every event in memory, e.g. for a combat log panel
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Mutex<Vec<(String, CharacterEvent)>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<(String, CharacterEvent)> {
        self.lock().clone()
    }

    /// Take everything recorded so far, leaving the log empty
    pub fn drain(&self) -> Vec<(String, CharacterEvent)> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, CharacterEvent)>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CharacterObserver for EventLog {
    fn on_event(&self, character: &str, event: &CharacterEvent) {
        self.lock().push((character.to_string(), event.clone()));
    }
}

/// Attached observers; not part of a character's state
#[derive(Clone, Default)]
pub(crate) struct Observers(Vec<Arc<dyn CharacterObserver>>);

impl Observers {
    pub(crate) fn attach(&mut self, observer: Arc<dyn CharacterObserver>) {
        self.0.push(observer);
    }

    pub(crate) fn emit(&self, character: &str, event: CharacterEvent) {
        match event.severity() {
            Severity::Debug => tracing::debug!(character = character, "{}", event),
            Severity::Info => tracing::info!(character = character, "{}", event),
            Severity::Warn => tracing::warn!(character = character, "{}", event),
        }
        for observer in &self.0 {
            observer.on_event(character, &event);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observers({})", self.0.len())
    }
}
