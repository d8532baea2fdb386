//! Stat - A single ability score with stacked modifiers

use serde::{Deserialize, Serialize};

/// Base value every ability score starts from
pub const DEFAULT_BASE_VALUE: i32 = 10;

/// An additive adjustment to a stat, tagged with the source that granted it
///
/// Serialized as a `[value, source, duration]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, String, Option<u32>)", into = "(i32, String, Option<u32>)")]
pub struct Modifier {
    pub value: i32,
    pub source: String,
    /// Turns remaining, `None` for permanent
    pub duration: Option<u32>,
}

impl Modifier {
    pub fn permanent(value: i32, source: impl Into<String>) -> Self {
        Modifier {
            value,
            source: source.into(),
            duration: None,
        }
    }

    pub fn timed(value: i32, source: impl Into<String>, turns: u32) -> Self {
        Modifier {
            value,
            source: source.into(),
            duration: Some(turns),
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.duration.is_none()
    }
}

impl From<(i32, String, Option<u32>)> for Modifier {
    fn from((value, source, duration): (i32, String, Option<u32>)) -> Self {
        Modifier {
            value,
            source,
            duration,
        }
    }
}

impl From<Modifier> for (i32, String, Option<u32>) {
    fn from(m: Modifier) -> Self {
        (m.value, m.source, m.duration)
    }
}

/// A single ability score
///
/// Final value is `base_value + Σ modifier.value`. Modifiers keep insertion
/// order and never merge, so the same source may stack any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub base_value: i32,
    #[serde(default)]
    modifiers: Vec<Modifier>,
}

impl Default for Stat {
    fn default() -> Self {
        Stat::with_base(DEFAULT_BASE_VALUE)
    }
}

impl Stat {
    /// Create a new Stat with the given base and no modifiers
    pub fn with_base(base_value: i32) -> Self {
        Stat {
            base_value,
            modifiers: Vec::new(),
        }
    }

    /// Current value: base plus every listed modifier
    pub fn value(&self) -> i32 {
        self.base_value + self.modifier_total()
    }

    /// Sum of all modifiers without the base
    pub fn modifier_total(&self) -> i32 {
        self.modifiers.iter().map(|m| m.value).sum()
    }

    /// Append a modifier. `None` duration is permanent.
    ///
    /// A zero duration would expire before it ever counted, so it is refused
    /// and `false` is returned.
    pub fn add_modifier(&mut self, value: i32, source: impl Into<String>, duration: Option<u32>) -> bool {
        let source = source.into();
        if duration == Some(0) {
            tracing::debug!("Refused zero-duration modifier {} from {}", value, source);
            return false;
        }
        self.modifiers.push(Modifier {
            value,
            source,
            duration,
        });
        true
    }

    /// Remove every modifier granted by `source`, returning how many were removed
    pub fn remove_modifier(&mut self, source: &str) -> usize {
        let before = self.modifiers.len();
        self.modifiers.retain(|m| m.source != source);
        before - self.modifiers.len()
    }

    /// Advance one turn, returning the modifiers that expired
    ///
    /// Permanent modifiers are untouched. Timed modifiers lose one turn and
    /// are dropped at the tick that would take them to zero.
    pub fn update(&mut self) -> Vec<Modifier> {
        let mut expired = Vec::new();
        let mut kept = Vec::with_capacity(self.modifiers.len());

        for mut modifier in self.modifiers.drain(..) {
            match modifier.duration {
                None => kept.push(modifier),
                Some(turns) if turns > 1 => {
                    modifier.duration = Some(turns - 1);
                    kept.push(modifier);
                }
                Some(_) => {
                    tracing::debug!("Modifier {} from {} expired", modifier.value, modifier.source);
                    expired.push(modifier);
                }
            }
        }

        self.modifiers = kept;
        expired
    }

    /// All modifiers in insertion order
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Modifiers granted by a specific source
    pub fn modifiers_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Modifier> + 'a {
        self.modifiers.iter().filter(move |m| m.source == source)
    }

    pub fn has_modifier_from(&self, source: &str) -> bool {
        self.modifiers.iter().any(|m| m.source == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        let stat = Stat::default();
        assert_eq!(stat.base_value, 10);
        assert_eq!(stat.value(), 10);
    }

    #[test]
    fn test_modifiers_stack_additively() {
        let mut stat = Stat::default();
        stat.add_modifier(2, "Ring", None);
        stat.add_modifier(2, "Ring", None);
        stat.add_modifier(-3, "Curse", Some(2));
        assert_eq!(stat.value(), 11);
        assert_eq!(stat.modifiers().len(), 3);
    }

    #[test]
    fn test_remove_modifier_removes_all_matching() {
        let mut stat = Stat::default();
        stat.add_modifier(2, "Ring", None);
        stat.add_modifier(1, "Belt", None);
        stat.add_modifier(3, "Ring", Some(4));

        assert_eq!(stat.remove_modifier("Ring"), 2);
        assert_eq!(stat.value(), 11);
        assert_eq!(stat.modifiers(), &[Modifier::permanent(1, "Belt")]);

        assert_eq!(stat.remove_modifier("Ring"), 0);
    }

    #[test]
    fn test_timed_modifier_expires_after_duration_ticks() {
        let mut stat = Stat::default();
        stat.add_modifier(5, "Bless", Some(3));

        assert!(stat.update().is_empty());
        assert_eq!(stat.modifiers()[0].duration, Some(2));
        assert!(stat.update().is_empty());
        assert_eq!(stat.value(), 15);

        let expired = stat.update();
        assert_eq!(expired, vec![Modifier::timed(5, "Bless", 1)]);
        assert_eq!(stat.value(), 10);
    }

    #[test]
    fn test_permanent_modifier_survives_updates() {
        let mut stat = Stat::default();
        stat.add_modifier(1, "Human Versatility", None);
        for _ in 0..10 {
            stat.update();
        }
        assert_eq!(stat.value(), 11);
    }

    #[test]
    fn test_zero_duration_refused() {
        let mut stat = Stat::default();
        assert!(!stat.add_modifier(4, "Flash", Some(0)));
        assert!(stat.modifiers().is_empty());
    }

    #[test]
    fn test_update_preserves_order() {
        let mut stat = Stat::default();
        stat.add_modifier(1, "a", Some(1));
        stat.add_modifier(2, "b", None);
        stat.add_modifier(3, "c", Some(5));
        stat.update();
        let sources: Vec<_> = stat.modifiers().iter().map(|m| m.source.as_str()).collect();
        assert_eq!(sources, vec!["b", "c"]);
    }

    #[test]
    fn test_serialized_as_triples() {
        let mut stat = Stat::with_base(12);
        stat.add_modifier(2, "Ring", None);
        stat.add_modifier(-1, "Poison", Some(3));

        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "base_value": 12,
                "modifiers": [[2, "Ring", null], [-1, "Poison", 3]]
            })
        );

        let back: Stat = serde_json::from_value(json).unwrap();
        assert_eq!(back, stat);
    }
}
