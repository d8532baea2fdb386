//! Experience and level-ups

use super::Character;
use crate::events::CharacterEvent;
use crate::source::{LevelBonus, StatSource};

/// Anything that can be defeated and award experience for it
pub trait Combatant {
    fn level(&self) -> u32;
}

impl Combatant for Character {
    fn level(&self) -> u32 {
        self.level
    }
}

/// Experience for defeating one opponent of `enemy_level` at `own_level`
///
/// Tougher opponents are worth half again as much; opponents more than a
/// level below are worth half, but never less than 1.
pub fn combat_experience(own_level: u32, enemy_level: u32) -> u32 {
    let base = enemy_level.saturating_mul(10);
    if enemy_level > own_level {
        base.saturating_mul(3) / 2
    } else if enemy_level.saturating_add(1) < own_level {
        (base / 2).max(1)
    } else {
        base
    }
}

impl Character {
    /// Add experience, granting at most one level per call
    ///
    /// Experience is not consumed by the level-up, so a character still at or
    /// above the new threshold levels again on the next call.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.experience = self.experience.saturating_add(amount);
        self.emit(CharacterEvent::ExperienceGained {
            amount,
            experience: self.experience,
            next_level_exp: self.next_level_exp,
        });

        if self.experience >= self.next_level_exp && self.level < u32::MAX {
            self.level_up();
            true
        } else {
            false
        }
    }

    /// Award experience for a batch of defeated opponents, returning the total
    pub fn gain_combat_experience<C: Combatant>(&mut self, defeated: &[C]) -> u32 {
        let total = defeated
            .iter()
            .map(|enemy| combat_experience(self.level, enemy.level()))
            .fold(0u32, u32::saturating_add);
        self.gain_experience(total);
        total
    }

    fn level_up(&mut self) {
        self.level += 1;
        LevelBonus::new(self.class, self.level).apply(&mut self.stats);

        self.max_health = self.rules.max_health(self.level, self.stats.constitution.value());
        self.max_mana = self.rules.max_mana(self.level, self.stats.intelligence.value());
        self.health = self.max_health;
        self.mana = self.max_mana;
        self.next_level_exp = self.rules.grow_threshold(self.next_level_exp);

        self.emit(CharacterEvent::LeveledUp {
            level: self.level,
            max_health: self.max_health,
            max_mana: self.max_mana,
        });
    }
}
