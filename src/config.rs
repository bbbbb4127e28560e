//! Engine configuration
//!
//! Loaded from a JSON file such as:
//!
//! ```json
//! { "board_size": 15, "difficulty": "hard" }
//! ```
//!
//! Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::engine::Difficulty;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Difficulty tier used by the engine
    pub difficulty: Difficulty,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::default(),
        }
    }
}

impl EngineConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`EngineConfig::load`], falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!(error = %err, "using default engine config");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }

    /// Empty board of the configured size
    pub fn new_board(&self) -> Board {
        Board::with_size(self.board_size)
    }
}
