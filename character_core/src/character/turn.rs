//! Status effects and the per-turn tick

use super::Character;
use crate::events::CharacterEvent;
use crate::status::StatusEffect;

impl Character {
    /// Add a status effect; identical effects stack rather than merge
    ///
    /// Returns `false` for a zero-turn effect, which is never listed.
    pub fn add_status_effect(&mut self, effect: impl Into<String>, source: impl Into<String>, duration: u32) -> bool {
        let status = StatusEffect::new(effect, source, duration);
        let event = CharacterEvent::StatusEffectAdded {
            effect: status.effect.clone(),
            source: status.source.clone(),
            duration,
        };
        if !self.status_effects.add(status) {
            tracing::debug!(character = %self.name, "Refused zero-duration status effect");
            return false;
        }
        self.emit(event);
        true
    }

    /// Remove the first status effect with this name
    pub fn remove_status_effect(&mut self, effect: &str) -> bool {
        match self.status_effects.remove_first(effect) {
            Some(removed) => {
                self.emit(CharacterEvent::StatusEffectRemoved { effect: removed.effect });
                true
            }
            None => {
                self.emit(CharacterEvent::StatusEffectMissing {
                    effect: effect.to_string(),
                });
                false
            }
        }
    }

    /// Advance one turn: tick every stat modifier and status effect
    ///
    /// Call exactly once per turn boundary; durations assume one decrement
    /// per turn.
    pub fn update(&mut self) {
        for (stat, modifier) in self.stats.update() {
            self.emit(CharacterEvent::ModifierExpired {
                stat,
                value: modifier.value,
                source: modifier.source,
            });
        }

        for expired in self.status_effects.tick() {
            self.emit(CharacterEvent::StatusEffectExpired {
                effect: expired.effect,
                source: expired.source,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::character::Character;
    use crate::types::{CharacterClass, Race, StatKind};

    fn cleric() -> Character {
        Character::new("Hal", Race::Human, CharacterClass::Cleric)
    }

    #[test]
    fn test_status_effect_lifecycle() {
        let mut hero = cleric();
        assert!(hero.add_status_effect("Poisoned", "Spider", 2));
        assert!(hero.has_status_effect("Poisoned"));

        hero.update();
        assert_eq!(hero.status_effects()[0].duration, 1);
        hero.update();
        assert!(!hero.has_status_effect("Poisoned"));
    }

    #[test]
    fn test_status_effects_stack() {
        let mut hero = cleric();
        hero.add_status_effect("Blessed", "Shrine", 3);
        hero.add_status_effect("Blessed", "Priest", 3);
        assert_eq!(hero.status_effects().len(), 2);

        assert!(hero.remove_status_effect("Blessed"));
        assert_eq!(hero.status_effects()[0].source, "Priest");
        assert!(hero.remove_status_effect("Blessed"));
        assert!(!hero.remove_status_effect("Blessed"));
    }

    #[test]
    fn test_update_expires_stat_modifiers() {
        let mut hero = cleric();
        let base = hero.stat(StatKind::Strength).value();
        hero.stat_mut(StatKind::Strength).add_modifier(3, "Bull Strength", Some(2));
        assert_eq!(hero.stat(StatKind::Strength).value(), base + 3);

        hero.update();
        assert_eq!(hero.stat(StatKind::Strength).value(), base + 3);
        hero.update();
        assert_eq!(hero.stat(StatKind::Strength).value(), base);
    }

    #[test]
    fn test_update_keeps_permanent_bonuses() {
        let mut hero = cleric();
        let before = hero.stats().clone();
        for _ in 0..5 {
            hero.update();
        }
        assert_eq!(hero.stats(), &before);
    }
}
