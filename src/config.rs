use crate::error::{config_error, env_error, RosterResult};
use crate::roster::models::{RosterSettings, DEFAULT_HOME_BASE, DEFAULT_REFERENCE_YEAR};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Optional file overriding the environment
pub const CONFIG_FILE: &str = "config/roster.toml";

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Station code that closes a work cycle
    pub home_base: String,
    /// Year assumed for roster dates
    pub reference_year: i32,
}

/// Overrides read from [`CONFIG_FILE`]
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    home_base: Option<String>,
    reference_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_base: DEFAULT_HOME_BASE.to_string(),
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> RosterResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config::default();

        if let Ok(home_base) = env::var("ROSTER_HOME_BASE") {
            config.home_base = home_base;
        }

        if let Ok(year) = env::var("ROSTER_REFERENCE_YEAR") {
            config.reference_year = year
                .trim()
                .parse::<i32>()
                .map_err(|_| env_error("ROSTER_REFERENCE_YEAR"))?;
        }

        if Path::new(CONFIG_FILE).exists() {
            let content = fs::read_to_string(CONFIG_FILE)?;
            config.merge_toml(&content)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a TOML document
    pub fn merge_toml(&mut self, content: &str) -> RosterResult<()> {
        let file: FileConfig = toml::from_str(content)?;

        if let Some(home_base) = file.home_base {
            self.home_base = home_base;
        }
        if let Some(year) = file.reference_year {
            self.reference_year = year;
        }

        Ok(())
    }

    /// Check the values the engine relies on
    pub fn validate(&self) -> RosterResult<()> {
        let home_base = self.home_base.trim();
        if home_base.len() != 3 || !home_base.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(config_error(&format!(
                "home base must be a three-letter station code, got {:?}",
                self.home_base
            )));
        }

        if !(1..=9999).contains(&self.reference_year) {
            return Err(config_error(&format!(
                "reference year out of range: {}",
                self.reference_year
            )));
        }

        Ok(())
    }

    /// Settings handed to the roster engine
    pub fn settings(&self) -> RosterSettings {
        RosterSettings {
            home_base: self.home_base.trim().to_string(),
            reference_year: self.reference_year,
        }
    }
}
