//! AI move selection with three difficulty tiers.
//!
//! None of the tiers search the game tree. Hard is a fixed priority list
//! (win, block, center, corner, anything) and does not see forks, so a
//! careful opponent can still beat it.

use super::engine::BoardEngine;
use super::position::{Move, Position};
use super::types::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AI strength.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal move.
    #[default]
    Easy,
    /// Takes an immediate win when one exists, otherwise random.
    Medium,
    /// Win, block, center, corner, then any move.
    Hard,
}

/// Error returned when the selector cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board has no empty squares.
    #[display("No legal move available")]
    NoLegalMove,

    /// Both sides were given the same mark.
    #[display("AI and opponent both play {}", _0)]
    SameMarks(Player),
}

impl std::error::Error for SelectError {}

/// Chooses moves for the computer player.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector;

impl MoveSelector {
    /// Picks a legal move for `ai_mark` at the given difficulty.
    ///
    /// All randomness is drawn from `rng`, so a seeded generator gives a
    /// reproducible choice.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoLegalMove`] on a full board and
    /// [`SelectError::SameMarks`] if `ai_mark == opponent_mark`.
    #[instrument(level = "debug", skip(board, rng))]
    pub fn choose_move<R: Rng + ?Sized>(
        board: &Board,
        difficulty: Difficulty,
        ai_mark: Player,
        opponent_mark: Player,
        rng: &mut R,
    ) -> Result<Move, SelectError> {
        if ai_mark == opponent_mark {
            return Err(SelectError::SameMarks(ai_mark));
        }

        let legal = BoardEngine::legal_moves(board);
        if legal.is_empty() {
            return Err(SelectError::NoLegalMove);
        }

        let choice = match difficulty {
            Difficulty::Easy => Self::random_move(&legal, rng),
            Difficulty::Medium => Self::winning_move(board, ai_mark)
                .or_else(|| Self::random_move(&legal, rng)),
            Difficulty::Hard => Self::heuristic_move(board, &legal, ai_mark, opponent_mark, rng),
        };

        let mv = choice.ok_or(SelectError::NoLegalMove)?;
        debug!(%mv, "AI chose move");
        Ok(mv)
    }

    /// Returns the first move, in row-major order, that completes a line for
    /// `mark`.
    #[instrument(level = "trace", skip(board))]
    pub fn winning_move(board: &Board, mark: Player) -> Option<Move> {
        BoardEngine::legal_moves(board).into_iter().find(|mv| {
            BoardEngine::apply_move(board, *mv, mark)
                .map(|next| BoardEngine::evaluate(&next).winner() == Some(mark))
                .unwrap_or(false)
        })
    }

    fn random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
        moves.choose(rng).copied()
    }

    fn heuristic_move<R: Rng + ?Sized>(
        board: &Board,
        legal: &[Move],
        ai_mark: Player,
        opponent_mark: Player,
        rng: &mut R,
    ) -> Option<Move> {
        if let Some(mv) = Self::winning_move(board, ai_mark) {
            debug!(%mv, "Taking winning move");
            return Some(mv);
        }

        if let Some(mv) = Self::winning_move(board, opponent_mark) {
            debug!(%mv, "Blocking opponent");
            return Some(mv);
        }

        if board.is_empty(Position::Center) {
            return Some(Move::from(Position::Center));
        }

        let corners: Vec<Move> = Position::CORNERS
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .map(Move::from)
            .collect();
        if let Some(mv) = Self::random_move(&corners, rng) {
            return Some(mv);
        }

        Self::random_move(legal, rng)
    }
}
