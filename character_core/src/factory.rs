//! CharacterFactory - Characters with optionally randomized name, race and class

use crate::character::Character;
use crate::config::{default_rules, CharacterRules, ConfigError};
use crate::types::{CharacterClass, Race};
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds characters, filling in whatever the caller leaves unspecified
#[derive(Debug, Clone)]
pub struct CharacterFactory {
    rules: CharacterRules,
}

impl Default for CharacterFactory {
    fn default() -> Self {
        CharacterFactory { rules: default_rules() }
    }
}

impl CharacterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose characters all use `rules`, validated up front
    pub fn with_rules(rules: CharacterRules) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(CharacterFactory { rules })
    }

    /// Random name in the style of the given race
    pub fn generate_name<R: Rng + ?Sized>(&self, race: Race, rng: &mut R) -> String {
        let (prefixes, suffixes) = name_parts(race);
        let prefix = prefixes.choose(rng).copied().unwrap_or("Al");
        let suffix = suffixes.choose(rng).copied().unwrap_or("bert");
        format!("{}{}", prefix, suffix)
    }

    /// Create a character using the thread-local RNG for anything unspecified
    pub fn create_character(
        &self,
        name: Option<String>,
        race: Option<Race>,
        class: Option<CharacterClass>,
    ) -> Character {
        let mut rng = rand::thread_rng();
        self.create_character_with_rng(&mut rng, name, race, class)
    }

    /// Create a character drawing anything unspecified from `rng`
    pub fn create_character_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        name: Option<String>,
        race: Option<Race>,
        class: Option<CharacterClass>,
    ) -> Character {
        let race = race.unwrap_or_else(|| *Race::all().choose(rng).unwrap_or(&Race::Human));
        let class = class
            .unwrap_or_else(|| *CharacterClass::all().choose(rng).unwrap_or(&CharacterClass::Warrior));
        let name = name.unwrap_or_else(|| self.generate_name(race, rng));

        Character::build(name, race, class, self.rules.clone())
    }
}

fn name_parts(race: Race) -> (&'static [&'static str], &'static [&'static str]) {
    match race {
        Race::Human => (
            &["Al", "Bran", "Cal", "Don", "Ed", "Fran", "Greg", "Hen", "Ian", "Jo"],
            &["bert", "don", "fred", "gar", "man", "ric", "son", "ton", "vic", "win"],
        ),
        Race::Elf => (
            &["Aer", "Bel", "Cel", "Del", "El", "Fae", "Gal", "Hal", "Il", "Jal"],
            &["arian", "driel", "ithil", "lian", "mar", "nor", "rian", "thien", "wyn", "zar"],
        ),
        Race::Dwarf => (
            &["Bor", "Dur", "Gar", "Gim", "Kaz", "Mor", "Nor", "Thor", "Thr", "Ul"],
            &["ar", "din", "drin", "grim", "li", "lin", "min", "nor", "rin", "thor"],
        ),
        Race::Orc => (
            &["Bru", "Gru", "Kra", "Kru", "Mug", "Nar", "Org", "Rok", "Ug", "Zug"],
            &["ak", "gar", "gash", "grub", "kk", "mar", "nak", "rag", "rok", "zog"],
        ),
    }
}
