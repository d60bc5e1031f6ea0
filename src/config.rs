//! Configuration for the console front end.
//!
//! A small TOML file with defaulted sections; every field can be omitted.
//! CLI arguments override the file, and the file overrides the defaults.
//!
//! ```toml
//! [game]
//! world_file = "maple_house.json"
//! prompt = "> "
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// JSON world seed document. When unset, the built-in demo world runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_file: Option<String>,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_farewell")]
    pub farewell: String,
    /// Printed when the dispatcher does not recognise a verb.
    #[serde(default = "default_invalid_command")]
    pub invalid_command: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_file: None,
            prompt: default_prompt(),
            farewell: default_farewell(),
            invalid_command: default_invalid_command(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_farewell() -> String {
    "Goodbye.".to_string()
}

fn default_invalid_command() -> String {
    "Invalid command. Type help for a list of commands.".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when no -v flag is given (error, warn, info, debug, trace).
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Write a starter config file. Refuses to clobber an existing one.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            anyhow::bail!("config file {} already exists", path.display());
        }
        let contents =
            toml::to_string_pretty(&Config::default()).context("serialising default config")?;
        fs::write(path, contents)
            .with_context(|| format!("writing config file {}", path.display()))?;
        Ok(())
    }
}
