//! StatBlock - The six ability scores of a character

mod stat;

pub use stat::{Modifier, Stat, DEFAULT_BASE_VALUE};

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Ability scores addressed by [`StatKind`]
///
/// Serializes as a map of stat name to `{ base_value, modifiers }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatBlock {
    pub strength: Stat,
    pub dexterity: Stat,
    pub constitution: Stat,
    pub intelligence: Stat,
    pub wisdom: Stat,
    pub charisma: Stat,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE_VALUE)
    }
}

impl StatBlock {
    /// Create a block where every score starts at `base`
    pub fn with_base(base: i32) -> Self {
        StatBlock {
            strength: Stat::with_base(base),
            dexterity: Stat::with_base(base),
            constitution: Stat::with_base(base),
            intelligence: Stat::with_base(base),
            wisdom: Stat::with_base(base),
            charisma: Stat::with_base(base),
        }
    }

    pub fn get(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::Strength => &self.strength,
            StatKind::Dexterity => &self.dexterity,
            StatKind::Constitution => &self.constitution,
            StatKind::Intelligence => &self.intelligence,
            StatKind::Wisdom => &self.wisdom,
            StatKind::Charisma => &self.charisma,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::Strength => &mut self.strength,
            StatKind::Dexterity => &mut self.dexterity,
            StatKind::Constitution => &mut self.constitution,
            StatKind::Intelligence => &mut self.intelligence,
            StatKind::Wisdom => &mut self.wisdom,
            StatKind::Charisma => &mut self.charisma,
        }
    }

    /// Shorthand for `get(kind).value()`
    pub fn value(&self, kind: StatKind) -> i32 {
        self.get(kind).value()
    }

    /// Iterate over all stats in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, &Stat)> {
        StatKind::all().iter().map(move |&kind| (kind, self.get(kind)))
    }

    /// Remove a source from every stat, returning the number of modifiers removed
    pub fn remove_source(&mut self, source: &str) -> usize {
        StatKind::all()
            .iter()
            .map(|&kind| self.get_mut(kind).remove_modifier(source))
            .sum()
    }

    /// Tick every stat once, returning expired modifiers with their stat
    pub fn update(&mut self) -> Vec<(StatKind, Modifier)> {
        let mut expired = Vec::new();
        for &kind in StatKind::all() {
            expired.extend(self.get_mut(kind).update().into_iter().map(|m| (kind, m)));
        }
        expired
    }

    /// Every modifier on every stat, for showing where a score comes from
    pub fn breakdown(&self) -> Vec<(StatKind, &Modifier)> {
        self.iter()
            .flat_map(|(kind, stat)| stat.modifiers().iter().map(move |m| (kind, m)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_addresses_named_field() {
        let mut block = StatBlock::default();
        block.get_mut(StatKind::Wisdom).add_modifier(3, "Cleric Devotion", None);
        assert_eq!(block.wisdom.value(), 13);
        assert_eq!(block.value(StatKind::Wisdom), 13);
        assert_eq!(block.value(StatKind::Charisma), 10);
    }

    #[test]
    fn test_remove_source_across_stats() {
        let mut block = StatBlock::default();
        block.strength.add_modifier(2, "Gauntlets", None);
        block.constitution.add_modifier(1, "Gauntlets", None);
        block.dexterity.add_modifier(1, "Boots", None);

        assert_eq!(block.remove_source("Gauntlets"), 2);
        assert_eq!(block.strength.value(), 10);
        assert_eq!(block.dexterity.value(), 11);
    }

    #[test]
    fn test_update_collects_expired() {
        let mut block = StatBlock::default();
        block.strength.add_modifier(2, "Rage", Some(1));
        block.wisdom.add_modifier(1, "Focus", Some(2));

        let expired = block.update();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].0, StatKind::Strength);
        assert_eq!(block.wisdom.modifiers()[0].duration, Some(1));
    }

    #[test]
    fn test_serialized_keys_are_stat_names() {
        let block = StatBlock::default();
        let json = serde_json::to_value(&block).unwrap();
        for kind in StatKind::all() {
            assert!(json.get(kind.as_str()).is_some(), "missing {}", kind);
        }
    }

    #[test]
    fn test_breakdown_lists_sources() {
        let mut block = StatBlock::default();
        block.strength.add_modifier(3, "Orcish Heritage", None);
        block.intelligence.add_modifier(-2, "Orcish Heritage", None);
        let breakdown = block.breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[1].0, StatKind::Intelligence);
        assert_eq!(breakdown[1].1.value, -2);
    }
}
