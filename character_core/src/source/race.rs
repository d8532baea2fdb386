//! RacialBonus - Stats granted by a character's race

use crate::source::StatSource;
use crate::types::{Race, StatKind};

/// Permanent racial stat adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RacialBonus {
    pub race: Race,
}

impl RacialBonus {
    pub fn new(race: Race) -> Self {
        RacialBonus { race }
    }
}

impl StatSource for RacialBonus {
    fn id(&self) -> &str {
        match self.race {
            Race::Human => "Human Versatility",
            Race::Elf => "Elven Heritage",
            Race::Dwarf => "Dwarven Heritage",
            Race::Orc => "Orcish Heritage",
        }
    }

    fn bonuses(&self) -> Vec<(StatKind, i32)> {
        use StatKind::*;
        match self.race {
            Race::Human => StatKind::all().iter().map(|&kind| (kind, 1)).collect(),
            Race::Elf => vec![(Dexterity, 2), (Intelligence, 2), (Constitution, -1)],
            Race::Dwarf => vec![(Constitution, 2), (Strength, 1), (Charisma, -1)],
            Race::Orc => vec![(Strength, 3), (Constitution, 2), (Intelligence, -2), (Charisma, -1)],
        }
    }
}
