//! Pure tic-tac-toe rules and computer opponent.
//!
//! # Architecture
//!
//! - **[`BoardEngine`]**: applies moves, detects wins and draws, lists legal moves
//! - **[`MoveSelector`]**: picks a move for the computer at a given [`Difficulty`]
//! - **Wire format**: [`Board`] serializes as a 3x3 array of `""`, `"X"`, `"O"`
//!
//! Nothing here owns game state. Callers keep the board and hand it in; each
//! operation returns a new value.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictacpro_rules::{Board, BoardEngine, Difficulty, Move, MoveSelector, Outcome, Player};
//!
//! let board = BoardEngine::apply_move(&Board::new(), Move::new(0, 0), Player::X)?;
//! assert_eq!(BoardEngine::evaluate(&board), Outcome::InProgress);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let reply = MoveSelector::choose_move(&board, Difficulty::Hard, Player::O, Player::X, &mut rng)?;
//! assert_eq!(reply, Move::new(1, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod outcome;
mod position;
mod selector;
mod types;
mod wire;

pub use engine::{BoardEngine, MoveError};
pub use outcome::{Outcome, WinningLine};
pub use position::{Move, Position};
pub use selector::{Difficulty, MoveSelector, SelectError};
pub use types::{Board, Player, Square};
pub use wire::{ParseBoardError, Rows};
