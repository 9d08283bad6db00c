//! Configuration loading from TOML files

pub mod plugin_params;
mod setup;

pub use plugin_params::{parse_plugin_parameters, parse_setup_records};
pub use setup::{CooldownSetup, CooldownSetupEntry, CooldownSetupTable, DEFAULT_COOLDOWN_TURN_COUNT};

use crate::display::CooldownDisplay;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse plugin parameters: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Settings for the skill cooldown system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CooldownSettings {
    /// Whether benched actors keep counting down their cooldowns
    #[serde(default)]
    pub decrease_benchwarmers_cooldown: bool,
    /// Skill list presentation of remaining turns
    #[serde(default)]
    pub display: CooldownDisplay,
    /// Trigger skill -> target skill cooldown records
    #[serde(default)]
    pub skill_cooldowns: Vec<CooldownSetup>,
}

impl CooldownSettings {
    /// Build the lookup table for the configured cooldowns
    pub fn setup_table(&self) -> CooldownSetupTable {
        CooldownSetupTable::new(self.skill_cooldowns.clone())
    }
}

/// Load cooldown settings from a TOML file
pub fn load_settings(path: &Path) -> Result<CooldownSettings, ConfigError> {
    let settings: CooldownSettings = load_toml(path)?;
    log::info!(
        "Loaded {} skill cooldown setting(s) from {}",
        settings.skill_cooldowns.len(),
        path.display()
    );
    Ok(settings)
}

/// Load cooldown settings from a TOML string
pub fn parse_settings(content: &str) -> Result<CooldownSettings, ConfigError> {
    parse_toml(content)
}

/// Get the bundled cooldown settings
pub fn default_settings() -> CooldownSettings {
    let toml = include_str!("../../config/cooldowns.toml");
    parse_settings(toml).unwrap_or_else(|e| {
        log::warn!("Bundled cooldown settings are invalid, using empty settings: {}", e);
        CooldownSettings::default()
    })
}
