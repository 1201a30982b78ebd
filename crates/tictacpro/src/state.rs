//! Game state value: board, turn, outcome and mode.
//!
//! `GameState` is never edited in place. Each move produces a complete new
//! state, so a caller can keep the old one around (for undo, display, or
//! comparison) without copying anything by hand.

use crate::{GameMode, GameSnapshot, SessionError, SnapshotError};
use derive_getters::Getters;
use tictacpro_rules::{Board, BoardEngine, Move, Outcome, Player};
use tracing::{debug, instrument};

/// One game: board, whose turn it is, how it stands, and the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    mode: GameMode,
}

impl GameState {
    /// Creates an empty game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            mode,
        }
    }

    /// Plays `mv` for the current player and returns the resulting state.
    ///
    /// The turn passes to the other player after every move, including the
    /// one that ends the game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] once the game has ended, or
    /// [`SessionError::Move`] if the rules reject the move.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&self, mv: Move) -> Result<Self, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::GameOver);
        }

        let board = BoardEngine::apply_move(&self.board, mv, self.current_player)?;
        let outcome = BoardEngine::evaluate(&board);
        debug!(%mv, %outcome, "Move applied");

        Ok(Self {
            board,
            current_player: self.current_player.opponent(),
            outcome,
            mode: self.mode,
        })
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns an empty game in the same mode.
    pub fn restarted(&self) -> Self {
        Self::new(self.mode)
    }

    /// Converts to the persisted form.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board,
            self.current_player,
            self.outcome.winner(),
            self.outcome.winning_line().map(|line| line.indices().to_vec()),
            self.outcome.is_draw(),
            self.mode,
        )
    }

    /// Restores a state from its persisted form.
    ///
    /// The outcome is recomputed from the board; the stored result fields
    /// must agree with it. An empty `winningCells` array is read as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the board could not arise from
    /// alternating play or the stored fields contradict it.
    #[instrument(skip(snapshot))]
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let board = snapshot.board;
        let expected = board.next_player().ok_or(SnapshotError::UnbalancedBoard {
            x: board.count(Player::X),
            o: board.count(Player::O),
        })?;

        if snapshot.current_player != expected {
            return Err(SnapshotError::TurnMismatch {
                stored: snapshot.current_player,
                expected,
            });
        }

        let outcome = BoardEngine::evaluate(&board);

        if snapshot.winner != outcome.winner() {
            return Err(SnapshotError::OutcomeMismatch(format!(
                "winner {:?}, board has {:?}",
                snapshot.winner,
                outcome.winner()
            )));
        }

        let stored_cells = snapshot
            .winning_cells
            .as_ref()
            .filter(|cells| !cells.is_empty());
        let actual_cells = outcome.winning_line().map(|line| line.indices().to_vec());
        if stored_cells != actual_cells.as_ref() {
            return Err(SnapshotError::OutcomeMismatch(format!(
                "winning cells {:?}, board has {:?}",
                stored_cells, actual_cells
            )));
        }

        if snapshot.is_draw != outcome.is_draw() {
            return Err(SnapshotError::OutcomeMismatch(format!(
                "draw flag {}, board says {}",
                snapshot.is_draw,
                outcome.is_draw()
            )));
        }

        Ok(Self {
            board,
            current_player: expected,
            outcome,
            mode: snapshot.game_mode,
        })
    }
}
