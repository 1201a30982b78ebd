//! Error types for the game application layer.

use derive_more::{Display, Error};
use tictacpro_rules::{MoveError, Player, SelectError};
use tracing::instrument;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// A persisted game state that does not describe a reachable game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SnapshotError {
    /// Mark counts cannot come from alternating play starting with X.
    #[display("Board has {} X and {} O marks", x, o)]
    UnbalancedBoard {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// The stored current player disagrees with the board.
    #[display("Stored turn is {} but the board says {}", stored, expected)]
    TurnMismatch {
        /// Player recorded in the snapshot.
        stored: Player,
        /// Player implied by the board.
        expected: Player,
    },

    /// The stored winner, winning cells or draw flag disagree with the board.
    #[display("Stored result disagrees with board: {}", _0)]
    OutcomeMismatch(String),
}

impl std::error::Error for SnapshotError {}

/// Error from a game session operation.
#[derive(Debug, Clone, Display)]
pub enum SessionError {
    /// The move was rejected by the rules.
    #[display("{}", _0)]
    Move(MoveError),

    /// The AI could not pick a move.
    #[display("{}", _0)]
    Select(SelectError),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// An AI move was requested outside the AI's turn.
    #[display("It is not the AI's turn")]
    NotAiTurn,

    /// The stored game could not be restored.
    #[display("{}", _0)]
    Snapshot(SnapshotError),

    /// Loading or saving failed.
    #[display("{}", _0)]
    Store(StoreError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Select(e) => Some(e),
            SessionError::Snapshot(e) => Some(e),
            SessionError::Store(e) => Some(e),
            SessionError::GameOver | SessionError::NotAiTurn => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl From<SelectError> for SessionError {
    fn from(err: SelectError) -> Self {
        SessionError::Select(err)
    }
}

impl From<SnapshotError> for SessionError {
    fn from(err: SnapshotError) -> Self {
        SessionError::Snapshot(err)
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        SessionError::Store(err)
    }
}
