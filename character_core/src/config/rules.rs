//! Character rules configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Tunable numbers behind character creation, progression and combat
///
/// Every field has a default, so a partial TOML file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRules {
    /// Starting value of every ability score
    #[serde(default = "default_base_stat_value")]
    pub base_stat_value: i32,
    #[serde(default = "default_max_inventory_slots")]
    pub max_inventory_slots: usize,
    #[serde(default)]
    pub progression: ProgressionRules,
    #[serde(default)]
    pub resources: ResourceRules,
    #[serde(default)]
    pub combat: CombatRules,
}

impl Default for CharacterRules {
    fn default() -> Self {
        CharacterRules {
            base_stat_value: default_base_stat_value(),
            max_inventory_slots: default_max_inventory_slots(),
            progression: ProgressionRules::default(),
            resources: ResourceRules::default(),
            combat: CombatRules::default(),
        }
    }
}

fn default_base_stat_value() -> i32 {
    10
}
fn default_max_inventory_slots() -> usize {
    20
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionRules {
    /// Experience needed to go from level 1 to level 2
    #[serde(default = "default_starting_next_level_exp")]
    pub starting_next_level_exp: u32,
    /// Threshold multiplier applied on every level-up
    #[serde(default = "default_level_exp_growth")]
    pub level_exp_growth: f64,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        ProgressionRules {
            starting_next_level_exp: default_starting_next_level_exp(),
            level_exp_growth: default_level_exp_growth(),
        }
    }
}

fn default_starting_next_level_exp() -> u32 {
    100
}
fn default_level_exp_growth() -> f64 {
    1.5
}

/// `max = base + per_level × level + governing stat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRules {
    #[serde(default = "default_health_base")]
    pub health_base: i32,
    #[serde(default = "default_health_per_level")]
    pub health_per_level: i32,
    #[serde(default = "default_mana_base")]
    pub mana_base: i32,
    #[serde(default = "default_mana_per_level")]
    pub mana_per_level: i32,
}

impl Default for ResourceRules {
    fn default() -> Self {
        ResourceRules {
            health_base: default_health_base(),
            health_per_level: default_health_per_level(),
            mana_base: default_mana_base(),
            mana_per_level: default_mana_per_level(),
        }
    }
}

fn default_health_base() -> i32 {
    100
}
fn default_health_per_level() -> i32 {
    10
}
fn default_mana_base() -> i32 {
    50
}
fn default_mana_per_level() -> i32 {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRules {
    /// Damage reduction is `floor(constitution / divisor)`
    #[serde(default = "default_damage_reduction_divisor")]
    pub damage_reduction_divisor: i32,
}

impl Default for CombatRules {
    fn default() -> Self {
        CombatRules {
            damage_reduction_divisor: default_damage_reduction_divisor(),
        }
    }
}

fn default_damage_reduction_divisor() -> i32 {
    4
}

impl CharacterRules {
    /// Check that the rules describe a playable character
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_inventory_slots == 0 {
            return Err(ConfigError::ValidationError(
                "max_inventory_slots must be at least 1".to_string(),
            ));
        }
        if self.progression.starting_next_level_exp == 0 {
            return Err(ConfigError::ValidationError(
                "starting_next_level_exp must be positive".to_string(),
            ));
        }
        let growth = self.progression.level_exp_growth;
        if growth.is_nan() || growth <= 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "level_exp_growth must be greater than 1, got {}",
                growth
            )));
        }
        if self.combat.damage_reduction_divisor <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "damage_reduction_divisor must be positive, got {}",
                self.combat.damage_reduction_divisor
            )));
        }
        Ok(())
    }

    /// Maximum health at `level` with the given constitution
    pub fn max_health(&self, level: u32, constitution: i32) -> u32 {
        scaled_resource(self.resources.health_base, self.resources.health_per_level, level, constitution)
    }

    /// Maximum mana at `level` with the given intelligence
    pub fn max_mana(&self, level: u32, intelligence: i32) -> u32 {
        scaled_resource(self.resources.mana_base, self.resources.mana_per_level, level, intelligence)
    }

    /// Flat damage absorbed per hit
    pub fn damage_reduction(&self, constitution: i32) -> i64 {
        i64::from(constitution.div_euclid(self.combat.damage_reduction_divisor))
    }

    /// Experience threshold after one more level-up
    ///
    /// Rounds half away from zero (`f64::round`), so 760.5 becomes 761.
    pub fn grow_threshold(&self, current: u32) -> u32 {
        let grown = (f64::from(current) * self.progression.level_exp_growth).round();
        if grown >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            grown as u32
        }
    }
}

fn scaled_resource(base: i32, per_level: i32, level: u32, stat: i32) -> u32 {
    let total = i64::from(base) + i64::from(per_level) * i64::from(level) + i64::from(stat);
    total.clamp(0, i64::from(u32::MAX)) as u32
}

/// Load and validate rules from a TOML file
pub fn load_rules(path: &Path) -> Result<CharacterRules, ConfigError> {
    let rules: CharacterRules = super::load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Load and validate rules from a TOML string
pub fn parse_rules(content: &str) -> Result<CharacterRules, ConfigError> {
    let rules: CharacterRules = super::parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}

/// Get the bundled rules, parsed once per process
pub fn default_rules() -> CharacterRules {
    static BUNDLED: OnceLock<CharacterRules> = OnceLock::new();
    BUNDLED
        .get_or_init(|| {
            parse_rules(include_str!("../../config/rules.toml")).unwrap_or_else(|e| {
                tracing::warn!("Bundled rules failed to load, using built-in defaults: {}", e);
                CharacterRules::default()
            })
        })
        .clone()
}
