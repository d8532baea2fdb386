//! Rules configuration - Character tunables loaded from TOML

mod rules;

pub use rules::{default_rules, load_rules, parse_rules, CharacterRules, CombatRules, ProgressionRules, ResourceRules};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a rules file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read rules file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse rules TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid rules: {0}")]
    ValidationError(String),
}

/// Read and deserialize any TOML document from disk
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    parse_toml(&fs::read_to_string(path)?)
}

/// Deserialize any TOML document from a string
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
