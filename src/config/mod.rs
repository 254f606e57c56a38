//! # Configuration
//!
//! The Square reads an optional TOML file for game, display and logging settings.
//! Every section has defaults, so a partial (or missing) file is fine.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! seed = 42          # omit for a random game each run
//! prompt = "> "
//!
//! [display]
//! reveal_robot_kinds = true
//! announce_robot_moves = true
//!
//! [logging]
//! level = "warn"
//! file = "thesquare.log"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use thesquare::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     println!("Prompt: {:?}", config.game.prompt);
//!     Config::create_default("config.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! CLI arguments take precedence over the file (`--seed` over `game.seed`,
//! `-v` over `logging.level`).

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed for item scatter and robot placement. `None` draws one at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            prompt: default_prompt(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show `R`/`B` on the map instead of anonymous robot glyphs.
    #[serde(default = "default_true")]
    pub reveal_robot_kinds: bool,
    /// Print robot movement and door narration each turn.
    #[serde(default = "default_true")]
    pub announce_robot_moves: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reveal_robot_kinds: true,
            announce_robot_moves: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log lines here instead of stderr.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!(
                    "Invalid logging level '{}', defaulting to warn",
                    self.level
                );
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Write this configuration as pretty TOML
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        Config::default().save(path)
    }
}
