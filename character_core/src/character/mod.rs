//! Character - Mutable state of a player or NPC
//!
//! A character owns its six ability scores, health and mana pools, level
//! progression, equipment, inventory, skills and status effects. Every
//! mutator either applies fully or leaves the character untouched; refusals
//! come back as `bool`, `Option` or `Result` values and are traced.

mod gear;
mod progression;
mod resources;
mod snapshot;
mod turn;

pub use gear::EquipError;
pub use progression::Combatant;
pub use snapshot::{CharacterRecord, RestoreError};

use crate::config::{default_rules, CharacterRules, ConfigError};
use crate::equipment::Equipment;
use crate::events::{CharacterEvent, CharacterObserver, Observers};
use crate::inventory::Inventory;
use crate::source::{ClassBonus, RacialBonus, StatSource};
use crate::stat_block::{Stat, StatBlock};
use crate::status::{StatusEffect, StatusEffects};
use crate::types::{CharacterClass, Race, StatKind};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Character {
    // === Identity ===
    name: String,
    race: Race,
    class: CharacterClass,

    // === Attributes ===
    stats: StatBlock,

    // === Resources ===
    health: u32,
    max_health: u32,
    mana: u32,
    max_mana: u32,

    // === Progression ===
    level: u32,
    experience: u32,
    next_level_exp: u32,

    // === Belongings ===
    equipment: Equipment,
    inventory: Inventory,

    skills: Vec<String>,
    status_effects: StatusEffects,

    rules: CharacterRules,
    observers: Observers,
}

impl Character {
    /// Create a level 1 character with the bundled rules
    pub fn new(name: impl Into<String>, race: Race, class: CharacterClass) -> Self {
        Self::build(name, race, class, default_rules())
    }

    /// Create a level 1 character with custom rules
    ///
    /// The rules are validated first; a character is never built on rules
    /// that could not be loaded from a file.
    pub fn with_rules(
        name: impl Into<String>,
        race: Race,
        class: CharacterClass,
        rules: CharacterRules,
    ) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self::build(name, race, class, rules))
    }

    /// Build on rules that have already been validated
    pub(crate) fn build(
        name: impl Into<String>,
        race: Race,
        class: CharacterClass,
        rules: CharacterRules,
    ) -> Self {
        let mut stats = StatBlock::with_base(rules.base_stat_value);
        RacialBonus::new(race).apply(&mut stats);
        ClassBonus::new(class).apply(&mut stats);

        let level = 1;
        let max_health = rules.max_health(level, stats.constitution.value());
        let max_mana = rules.max_mana(level, stats.intelligence.value());

        let character = Character {
            name: name.into(),
            race,
            class,
            stats,
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            level,
            experience: 0,
            next_level_exp: rules.progression.starting_next_level_exp,
            equipment: Equipment::new(),
            inventory: Inventory::with_capacity(rules.max_inventory_slots),
            skills: class.starting_skills().iter().map(|s| s.to_string()).collect(),
            status_effects: StatusEffects::new(),
            rules,
            observers: Observers::default(),
        };
        character.emit(CharacterEvent::Created { race, class });
        character
    }

    /// Attach an observer that receives every subsequent event
    pub fn attach_observer(&mut self, observer: Arc<dyn CharacterObserver>) {
        self.observers.attach(observer);
    }

    pub(crate) fn emit(&self, event: CharacterEvent) {
        self.observers.emit(&self.name, event);
    }

    // === Identity ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn character_class(&self) -> CharacterClass {
        self.class
    }

    // === Attributes ===

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn stat(&self, kind: StatKind) -> &Stat {
        self.stats.get(kind)
    }

    /// Mutable access for effects that add their own timed modifiers
    ///
    /// Resource maximums are only recomputed on level-up.
    pub fn stat_mut(&mut self, kind: StatKind) -> &mut Stat {
        self.stats.get_mut(kind)
    }

    // === Resources ===

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    // === Progression ===

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn next_level_exp(&self) -> u32 {
        self.next_level_exp
    }

    // === Belongings ===

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn max_inventory_slots(&self) -> usize {
        self.inventory.capacity()
    }

    // === Skills ===

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Append a skill; returns `false` if it was already known
    pub fn learn_skill(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.has_skill(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    // === Status Effects ===

    pub fn status_effects(&self) -> &[StatusEffect] {
        self.status_effects.as_slice()
    }

    pub fn has_status_effect(&self, effect: &str) -> bool {
        self.status_effects.contains(effect)
    }

    pub fn rules(&self) -> &CharacterRules {
        &self.rules
    }
}
