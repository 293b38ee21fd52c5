use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crossword_core::DEFAULT_GRID_SIZE;
use crossword_store::service::DEFAULT_WORD_COUNT;
use crossword_store::Difficulty;

/// CLI settings, read from a JSON file. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Where the word bank and puzzles are kept.
    pub store_path: PathBuf,
    pub grid_size: usize,
    pub default_word_count: usize,
    pub default_difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("crossword-store.json"),
            grid_size: DEFAULT_GRID_SIZE,
            default_word_count: DEFAULT_WORD_COUNT,
            default_difficulty: Difficulty::Medium,
        }
    }
}

impl Settings {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Config file not found: {}, using default settings", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
