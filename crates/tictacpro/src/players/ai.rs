//! Computer contestant.

use super::Contestant;
use crate::GameState;
use anyhow::Result;
use rand::Rng;
use std::time::Duration;
use tictacpro_rules::{Difficulty, Move, MoveSelector, Player};
use tracing::{debug, instrument};

/// Computer player backed by [`MoveSelector`].
///
/// The selector answers instantly; the optional pause only paces the game for
/// the person watching.
#[derive(Debug)]
pub struct AiPlayer<R> {
    name: String,
    difficulty: Difficulty,
    mark: Player,
    delay: Duration,
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    /// Creates a computer player for `mark`.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, mark: Player, rng: R) -> Self {
        Self {
            name: name.into(),
            difficulty,
            mark,
            delay: Duration::ZERO,
            rng,
        }
    }

    /// Sets the pause before each answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl<R: Rng> Contestant for AiPlayer<R> {
    #[instrument(skip(self, state), fields(ai = %self.name, difficulty = %self.difficulty))]
    fn next_move(&mut self, state: &GameState) -> Result<Move> {
        debug!("AI making move");

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let mv = MoveSelector::choose_move(
            state.board(),
            self.difficulty,
            self.mark,
            self.mark.opponent(),
            &mut self.rng,
        )?;
        debug!(%mv, "AI chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
