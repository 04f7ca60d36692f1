use std::path::Path;

use log::warn;

use crate::ai::SearchConfig;
use crate::error::ConfigError;
use crate::game::Player;

pub use crate::ai::search::MAX_DEPTH;

/// Who sits across from the engine in the command-line driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Columns typed on stdin.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// A second copy of the engine.
    Engine,
}

/// Match setup for the command-line driver.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub engine_player: Player,
    pub first_player: Player,
    pub opponent: Opponent,
    /// Seed for the random opponent; drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            engine_player: Player::Yellow,
            first_player: Player::Red,
            opponent: Opponent::Human,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub play: PlayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
