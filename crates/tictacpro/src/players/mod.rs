//! Contestant trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::{HumanPlayer, parse_move};

use crate::GameState;
use anyhow::Result;
use tictacpro_rules::Move;

/// Anything that can take a turn at the board.
pub trait Contestant {
    /// Gets the next move for the current position.
    fn next_move(&mut self, state: &GameState) -> Result<Move>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;

    /// Returns true if an illegal move should be answered with a re-prompt
    /// rather than ending the game.
    fn is_human(&self) -> bool {
        false
    }
}
