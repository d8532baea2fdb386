//! Core enumerations shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a name does not match any known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        ParseError {
            kind,
            value: value.to_string(),
        }
    }
}

/// Playable race, fixed for the lifetime of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Orc,
}

impl Race {
    pub fn all() -> &'static [Race] {
        &[Race::Human, Race::Elf, Race::Dwarf, Race::Orc]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Elf => "elf",
            Race::Dwarf => "dwarf",
            Race::Orc => "orc",
        }
    }
}

/// Character class, fixed for the lifetime of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

impl CharacterClass {
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Rogue,
            CharacterClass::Cleric,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "warrior",
            CharacterClass::Mage => "mage",
            CharacterClass::Rogue => "rogue",
            CharacterClass::Cleric => "cleric",
        }
    }

    /// Skills every member of the class starts with
    pub fn starting_skills(&self) -> [&'static str; 3] {
        match self {
            CharacterClass::Warrior => ["Slash", "Defend", "Taunt"],
            CharacterClass::Mage => ["Fireball", "Magic Shield", "Analyze"],
            CharacterClass::Rogue => ["Backstab", "Pickpocket", "Detect Traps"],
            CharacterClass::Cleric => ["Heal", "Smite", "Bless"],
        }
    }
}

/// One of the six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl StatKind {
    /// All ability scores in canonical order
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Strength,
            StatKind::Dexterity,
            StatKind::Constitution,
            StatKind::Intelligence,
            StatKind::Wisdom,
            StatKind::Charisma,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Strength => "strength",
            StatKind::Dexterity => "dexterity",
            StatKind::Constitution => "constitution",
            StatKind::Intelligence => "intelligence",
            StatKind::Wisdom => "wisdom",
            StatKind::Charisma => "charisma",
        }
    }
}

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Head,
    Chest,
    Legs,
    Feet,
    MainHand,
    OffHand,
    Accessory,
}

impl EquipmentSlot {
    pub const COUNT: usize = 7;

    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Head,
            EquipmentSlot::Chest,
            EquipmentSlot::Legs,
            EquipmentSlot::Feet,
            EquipmentSlot::MainHand,
            EquipmentSlot::OffHand,
            EquipmentSlot::Accessory,
        ]
    }

    /// Position of the slot in `all()`
    pub fn index(&self) -> usize {
        match self {
            EquipmentSlot::Head => 0,
            EquipmentSlot::Chest => 1,
            EquipmentSlot::Legs => 2,
            EquipmentSlot::Feet => 3,
            EquipmentSlot::MainHand => 4,
            EquipmentSlot::OffHand => 5,
            EquipmentSlot::Accessory => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentSlot::Head => "head",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Legs => "legs",
            EquipmentSlot::Feet => "feet",
            EquipmentSlot::MainHand => "main_hand",
            EquipmentSlot::OffHand => "off_hand",
            EquipmentSlot::Accessory => "accessory",
        }
    }
}

macro_rules! impl_name_conversions {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
                <$ty>::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| ParseError::new($kind, s))
            }
        }
    };
}

impl_name_conversions!(Race, "race");
impl_name_conversions!(CharacterClass, "character class");
impl_name_conversions!(StatKind, "stat");
impl_name_conversions!(EquipmentSlot, "equipment slot");
