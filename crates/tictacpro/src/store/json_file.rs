//! JSON files in a directory.

use super::GameStore;
use crate::{GameSnapshot, Score, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const GAME_FILE: &str = "game_state.json";
const SCORE_FILE: &str = "score.json";

/// Stores `game_state.json` and `score.json` under one directory.
///
/// The directory is created on the first save. Files are written to a
/// temporary sibling and renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        info!("Creating JsonFileStore");
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the saved game file.
    pub fn game_path(&self) -> PathBuf {
        self.dir.join(GAME_FILE)
    }

    /// Path of the saved score file.
    pub fn score_path(&self) -> PathBuf {
        self.dir.join(SCORE_FILE)
    }

    #[instrument(skip(path), fields(path = %path.display()))]
    fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
        if !path.exists() {
            debug!("No saved file");
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let value = serde_json::from_str(&content).map_err(|e| {
            StoreError::new(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        Ok(Some(value))
    }

    #[instrument(skip(self, value), fields(dir = %self.dir.display()))]
    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{}.tmp", file));
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "Saved");
        Ok(())
    }
}

impl GameStore for JsonFileStore {
    fn load_game_state(&self) -> Result<Option<GameSnapshot>, StoreError> {
        Self::read(&self.game_path())
    }

    fn save_game_state(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        self.write(GAME_FILE, snapshot)
    }

    fn load_score(&self) -> Result<Score, StoreError> {
        Ok(Self::read(&self.score_path())?.unwrap_or_default())
    }

    fn save_score(&mut self, score: &Score) -> Result<(), StoreError> {
        self.write(SCORE_FILE, score)
    }
}
