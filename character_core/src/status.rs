//! Status effects - Named narrative conditions with a turn countdown

use serde::{Deserialize, Serialize};

/// A named condition and the source that inflicted it
///
/// Serialized as an `[effect, source, duration]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, u32)", into = "(String, String, u32)")]
pub struct StatusEffect {
    pub effect: String,
    pub source: String,
    /// Turns remaining, always at least 1 while listed
    pub duration: u32,
}

impl StatusEffect {
    pub fn new(effect: impl Into<String>, source: impl Into<String>, duration: u32) -> Self {
        StatusEffect {
            effect: effect.into(),
            source: source.into(),
            duration,
        }
    }
}

impl From<(String, String, u32)> for StatusEffect {
    fn from((effect, source, duration): (String, String, u32)) -> Self {
        StatusEffect {
            effect,
            source,
            duration,
        }
    }
}

impl From<StatusEffect> for (String, String, u32) {
    fn from(s: StatusEffect) -> Self {
        (s.effect, s.source, s.duration)
    }
}

/// Active effects in the order they were gained; duplicates stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusEffects(Vec<StatusEffect>);

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect. Zero-turn effects are refused.
    pub fn add(&mut self, effect: StatusEffect) -> bool {
        if effect.duration == 0 {
            return false;
        }
        self.0.push(effect);
        true
    }

    /// Remove the first effect with this name
    pub fn remove_first(&mut self, effect: &str) -> Option<StatusEffect> {
        let index = self.0.iter().position(|s| s.effect == effect)?;
        Some(self.0.remove(index))
    }

    pub fn contains(&self, effect: &str) -> bool {
        self.0.iter().any(|s| s.effect == effect)
    }

    /// Advance one turn, returning the effects that ran out
    pub fn tick(&mut self) -> Vec<StatusEffect> {
        let (kept, expired): (Vec<_>, Vec<_>) = self
            .0
            .drain(..)
            .map(|mut s| {
                s.duration = s.duration.saturating_sub(1);
                s
            })
            .partition(|s| s.duration > 0);
        self.0 = kept;
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[StatusEffect] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
