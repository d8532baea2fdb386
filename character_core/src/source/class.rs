//! ClassBonus and LevelBonus - Stats granted by class training and level-ups

use crate::source::StatSource;
use crate::types::{CharacterClass, StatKind};

/// Permanent stat adjustments applied once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassBonus {
    pub class: CharacterClass,
}

impl ClassBonus {
    pub fn new(class: CharacterClass) -> Self {
        ClassBonus { class }
    }
}

impl StatSource for ClassBonus {
    fn id(&self) -> &str {
        match self.class {
            CharacterClass::Warrior => "Warrior Training",
            CharacterClass::Mage => "Mage Study",
            CharacterClass::Rogue => "Rogue Training",
            CharacterClass::Cleric => "Cleric Devotion",
        }
    }

    fn bonuses(&self) -> Vec<(StatKind, i32)> {
        use StatKind::*;
        match self.class {
            CharacterClass::Warrior => vec![(Strength, 2), (Constitution, 1)],
            CharacterClass::Mage => vec![(Intelligence, 2), (Strength, -1)],
            CharacterClass::Rogue => vec![(Dexterity, 2), (Charisma, 1)],
            CharacterClass::Cleric => vec![(Wisdom, 2), (Charisma, 1)],
        }
    }
}

/// Stat growth granted on reaching a level
///
/// Each level gets its own source tag, so bumps accumulate instead of
/// replacing one another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelBonus {
    pub class: CharacterClass,
    pub level: u32,
    id: String,
}

impl LevelBonus {
    pub fn new(class: CharacterClass, level: u32) -> Self {
        let title = match class {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Cleric => "Cleric",
        };
        LevelBonus {
            class,
            level,
            id: format!("{} Level {}", title, level),
        }
    }
}

impl StatSource for LevelBonus {
    fn id(&self) -> &str {
        &self.id
    }

    fn bonuses(&self) -> Vec<(StatKind, i32)> {
        use StatKind::*;
        match self.class {
            CharacterClass::Warrior => vec![(Strength, 2), (Constitution, 1)],
            CharacterClass::Mage => vec![(Intelligence, 2), (Dexterity, 1)],
            CharacterClass::Rogue => vec![(Constitution, 1), (Dexterity, 1)],
            CharacterClass::Cleric => vec![(Wisdom, 1), (Strength, 1)],
        }
    }
}
