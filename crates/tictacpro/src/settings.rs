//! Game settings loaded from TOML.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictacpro_rules::{Difficulty, Player};
use tracing::{debug, info, instrument, warn};

/// Environment variable overriding [`Settings::state_dir`].
pub const STATE_DIR_ENV: &str = "TICTACPRO_STATE_DIR";

/// Environment variable overriding [`Settings::difficulty`].
pub const DIFFICULTY_ENV: &str = "TICTACPRO_DIFFICULTY";

/// Who sits across the board from the first human.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays against the computer.
    Ai,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::Ai,
            GameMode::Ai => GameMode::TwoPlayer,
        }
    }
}

/// Player-facing game settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Two-player or versus the computer.
    #[serde(default)]
    game_mode: GameMode,

    /// AI strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark the computer plays; the human takes the other one.
    #[serde(default = "default_ai_mark")]
    ai_mark: Player,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Directory holding the saved game and score.
    #[serde(default = "default_state_dir")]
    state_dir: PathBuf,
}

#[instrument]
fn default_ai_mark() -> Player {
    Player::O
}

#[instrument]
fn default_ai_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_state_dir() -> PathBuf {
    PathBuf::from(".tictacpro")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_mark: default_ai_mark(),
            ai_delay_ms: default_ai_delay_ms(),
            state_dir: default_state_dir(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(mode = %settings.game_mode, difficulty = %settings.difficulty, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid settings TOML.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies `TICTACPRO_STATE_DIR` and `TICTACPRO_DIFFICULTY` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the difficulty variable holds an unknown tier.
    #[instrument(skip(self))]
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(dir) = std::env::var(STATE_DIR_ENV) {
            debug!(dir = %dir, "State directory from environment");
            self.state_dir = PathBuf::from(dir);
        }
        if let Ok(value) = std::env::var(DIFFICULTY_ENV) {
            self.difficulty = value.parse().map_err(|_| {
                warn!(value = %value, "Unknown difficulty in environment");
                ConfigError::new(format!("{} has unknown difficulty '{}'", DIFFICULTY_ENV, value))
            })?;
        }
        Ok(self)
    }

    /// Returns these settings with a different game mode.
    pub fn with_game_mode(mut self, game_mode: GameMode) -> Self {
        self.game_mode = game_mode;
        self
    }

    /// Returns these settings with a different difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Returns these settings with a different AI mark.
    pub fn with_ai_mark(mut self, ai_mark: Player) -> Self {
        self.ai_mark = ai_mark;
        self
    }

    /// Returns these settings with a different AI pause.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: u64) -> Self {
        self.ai_delay_ms = ai_delay_ms;
        self
    }

    /// Returns these settings with a different state directory.
    pub fn with_state_dir(mut self, state_dir: impl Into<PathBuf>) -> Self {
        self.state_dir = state_dir.into();
        self
    }

    /// Mark the human plays in AI mode.
    pub fn human_mark(&self) -> Player {
        self.ai_mark.opponent()
    }
}
