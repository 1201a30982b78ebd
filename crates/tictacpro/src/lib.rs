//! TicTacPro - tic-tac-toe with score keeping and a computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: board engine and AI from [`tictacpro_rules`]
//! - **State**: [`GameState`] values, replaced whole on every move
//! - **Session**: [`GameSession`] ties state, [`Score`] and a [`GameStore`] together
//! - **Players**: [`Contestant`]s (human or [`AiPlayer`]) driven by an [`Orchestrator`]
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tictacpro::{GameMode, GameSession, MemoryStore, Settings};
//! use tictacpro_rules::Move;
//!
//! # fn example() -> Result<(), tictacpro::SessionError> {
//! let settings = Settings::default().with_game_mode(GameMode::Ai);
//! let mut session = GameSession::new(settings, MemoryStore::new());
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! session.play(Move::new(0, 0))?;
//! let reply = session.ai_move(&mut rng)?;
//! println!("AI answered {reply}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod orchestrator;
mod players;
mod score;
mod session;
mod settings;
mod snapshot;
mod state;
mod store;

// Crate-level exports - Errors
pub use error::{ConfigError, SessionError, SnapshotError, StoreError};

// Crate-level exports - Configuration
pub use settings::{DIFFICULTY_ENV, GameMode, STATE_DIR_ENV, Settings};

// Crate-level exports - Game state and scoring
pub use score::Score;
pub use snapshot::GameSnapshot;
pub use state::GameState;

// Crate-level exports - Persistence
pub use store::{GameStore, JsonFileStore, MemoryStore};

// Crate-level exports - Session and orchestration
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{AiPlayer, Contestant, HumanPlayer, parse_move};
pub use session::GameSession;
