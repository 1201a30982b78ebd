//! Persistence collaborator for game state and score.
//!
//! The session only needs four calls from storage. Backends are swappable:
//! [`MemoryStore`] keeps everything in process, [`JsonFileStore`] writes JSON
//! files to a directory.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::{GameSnapshot, Score, StoreError};

/// Load/save contract for the current game and the running score.
pub trait GameStore: std::fmt::Debug {
    /// Returns the saved game, or `None` if nothing has been saved yet.
    fn load_game_state(&self) -> Result<Option<GameSnapshot>, StoreError>;

    /// Saves the current game, replacing any earlier one.
    fn save_game_state(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError>;

    /// Returns the saved score, or a zero score if nothing has been saved.
    fn load_score(&self) -> Result<Score, StoreError>;

    /// Saves the score, replacing any earlier one.
    fn save_score(&mut self, score: &Score) -> Result<(), StoreError>;
}

impl<S: GameStore + ?Sized> GameStore for Box<S> {
    fn load_game_state(&self) -> Result<Option<GameSnapshot>, StoreError> {
        (**self).load_game_state()
    }

    fn save_game_state(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        (**self).save_game_state(snapshot)
    }

    fn load_score(&self) -> Result<Score, StoreError> {
        (**self).load_score()
    }

    fn save_score(&mut self, score: &Score) -> Result<(), StoreError> {
        (**self).save_score(score)
    }
}
