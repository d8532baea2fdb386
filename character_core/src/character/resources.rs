//! Health and mana

use super::Character;
use crate::events::CharacterEvent;

impl Character {
    /// Apply incoming damage after constitution-based reduction
    ///
    /// Returns the damage actually dealt. Health never drops below zero.
    pub fn take_damage(&mut self, amount: u32, source: Option<&str>) -> u32 {
        let reduction = self.rules.damage_reduction(self.stats.constitution.value());
        let dealt = (i64::from(amount) - reduction).clamp(0, i64::from(u32::MAX)) as u32;

        let was_standing = self.health > 0;
        self.health = self.health.saturating_sub(dealt);

        self.emit(CharacterEvent::DamageTaken {
            amount: dealt,
            source: source.map(str::to_string),
            health: self.health,
            max_health: self.max_health,
        });
        if was_standing && self.health == 0 {
            self.emit(CharacterEvent::Defeated);
        }

        dealt
    }

    /// Restore health up to the maximum, returning the amount actually healed
    pub fn heal(&mut self, amount: u32, source: Option<&str>) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        let healed = self.health - before;

        self.emit(CharacterEvent::Healed {
            amount: healed,
            source: source.map(str::to_string),
            health: self.health,
            max_health: self.max_health,
        });
        healed
    }

    /// Spend mana if there is enough of it
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        if self.mana < amount {
            self.emit(CharacterEvent::ManaInsufficient {
                requested: amount,
                available: self.mana,
            });
            return false;
        }

        self.mana -= amount;
        self.emit(CharacterEvent::ManaSpent {
            amount,
            mana: self.mana,
        });
        true
    }

    /// Restore mana up to the maximum, returning the amount actually restored
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
        let restored = self.mana - before;

        self.emit(CharacterEvent::ManaRestored {
            amount: restored,
            mana: self.mana,
        });
        restored
    }

    /// Whether health has reached zero
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_defeated()
    }
}
