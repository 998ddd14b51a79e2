//! Game configuration, read from an optional JSON file.

use std::fs;
use std::path::Path;

use error::GameError;
use hero::HeroStats;
use serde::{Deserialize, Serialize};

/// Top level config file layout; every field may be omitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub hero: HeroStats,
    /// Treasure seed; a random one is used when absent
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path).map_err(|err| {
            GameError::IoError(std::io::Error::new(
                err.kind(),
                format!("config file {}: {err}", path.display()),
            ))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.hero.validate()?;
        Ok(config)
    }
}
