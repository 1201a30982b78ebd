//! In-process store.

use super::GameStore;
use crate::{GameSnapshot, Score, StoreError};
use tracing::{debug, instrument};

/// Keeps the game and score in memory; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    game: Option<GameSnapshot>,
    score: Score,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a game and score.
    pub fn with_contents(game: Option<GameSnapshot>, score: Score) -> Self {
        Self {
            game,
            score,
            saves: 0,
        }
    }

    /// Number of save calls received so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl GameStore for MemoryStore {
    #[instrument(skip(self))]
    fn load_game_state(&self) -> Result<Option<GameSnapshot>, StoreError> {
        Ok(self.game.clone())
    }

    #[instrument(skip(self, snapshot))]
    fn save_game_state(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        debug!("Saving game in memory");
        self.game = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }

    #[instrument(skip(self))]
    fn load_score(&self) -> Result<Score, StoreError> {
        Ok(self.score)
    }

    #[instrument(skip(self))]
    fn save_score(&mut self, score: &Score) -> Result<(), StoreError> {
        self.score = *score;
        self.saves += 1;
        Ok(())
    }
}
