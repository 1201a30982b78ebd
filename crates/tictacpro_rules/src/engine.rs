//! Board engine: move validation, application and outcome detection.
//!
//! Every operation is a pure function of the board passed in. Applying a move
//! returns a fresh board and leaves the input untouched, which is what lets
//! the move selector try moves on scratch boards.

use super::outcome::{Outcome, WinningLine};
use super::position::{Move, Position};
use super::types::{Board, Player, Square};
use tracing::instrument;

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The coordinates are outside the 3x3 board.
    #[display("Move ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Stateless tic-tac-toe rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardEngine;

impl BoardEngine {
    /// Places `player`'s mark at `mv`, returning the new board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinates are off the
    /// board and [`MoveError::SquareOccupied`] if the target is taken. The
    /// input board is never modified.
    #[instrument(level = "trace", skip(board), fields(mv = %mv, player = %player))]
    pub fn apply_move(board: &Board, mv: Move, player: Player) -> Result<Board, MoveError> {
        let pos = mv.position().ok_or(MoveError::OutOfBounds {
            row: mv.row,
            col: mv.col,
        })?;

        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = *board;
        next.set(pos, Square::Occupied(player));
        Ok(next)
    }

    /// Classifies the board.
    ///
    /// Lines are checked in [`WinningLine::ALL`] order and the first complete
    /// one wins, so the result is deterministic even for boards that cannot
    /// arise from alternating play.
    #[instrument(level = "trace", skip(board))]
    pub fn evaluate(board: &Board) -> Outcome {
        for line in WinningLine::ALL {
            if let Some(player) = line.owner(board) {
                return Outcome::Win { player, line };
            }
        }

        if Self::is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns every empty cell as a move, in row-major order.
    #[instrument(level = "trace", skip(board))]
    pub fn legal_moves(board: &Board) -> Vec<Move> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .map(Move::from)
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(board: &Board) -> bool {
        board.squares().iter().all(|s| *s != Square::Empty)
    }
}
