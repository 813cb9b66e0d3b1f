//! Configuration handling for tasklist
//!
//! Configuration is read from, in order of precedence:
//! - an explicit path (`--config` or `TASKLIST_CONFIG`)
//! - `./tasklist.toml` in the current directory
//! - `~/.config/tasklist/config.toml` (platform config dir)
//!
//! Configuration is read-only input: the task list itself is never written back.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Filter, DEFAULT_DISPLAY_LIMIT};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "tasklist.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Task list configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Texts of the tasks the list starts with
    pub seed: Vec<String>,

    /// Characters shown before task text is cut off
    pub display_limit: usize,

    /// Filter active at startup
    pub filter: Filter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: ["Victor", "Garcia", "Baez", "VictorGarciaBaez"]
                .into_iter()
                .map(String::from)
                .collect(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            filter: Filter::All,
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// Returns the file path, if the configuration came from a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Local(p) | ConfigSource::Global(p) => {
                Some(p.as_path())
            }
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("built-in defaults"),
        }
    }
}

impl Config {
    /// Loads configuration from an explicit path or the default locations
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            let config = Self::load_file(&local)?;
            return Ok((config, ConfigSource::Local(local)));
        }

        if let Some(global) = Self::global_config_path() {
            if global.is_file() {
                let config = Self::load_file(&global)?;
                return Ok((config, ConfigSource::Global(global)));
            }
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tasklist", "tasklist")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Reads and validates a config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        Ok(config)
    }

    /// Parses and validates config content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the store cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_limit == 0 {
            return Err(ConfigError::Invalid(
                "display_limit must be at least 1".to_string(),
            ));
        }

        if let Some(pos) = self.seed.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "seed entry {} is blank",
                pos + 1
            )));
        }

        Ok(())
    }

    /// Serializes the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
