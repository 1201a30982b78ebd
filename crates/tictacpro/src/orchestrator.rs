//! Game orchestration between contestants.

use crate::{Contestant, GameSession, GameStore, Score, SessionError};
use anyhow::Result;
use tictacpro_rules::{Move, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to whatever is displaying the game.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Board changed; carries the rendered grid.
    StateChanged(String),
    /// A non-human contestant is choosing.
    Thinking {
        /// Contestant name.
        name: String,
    },
    /// Move was made.
    MoveMade {
        /// Mark that moved.
        player: Player,
        /// Contestant name.
        name: String,
        /// The move.
        mv: Move,
    },
    /// A human entered a move the rules reject; they will be asked again.
    InvalidMove {
        /// Contestant name.
        name: String,
        /// Why the move was rejected.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Score after this game was counted.
        score: Score,
    },
}

/// Runs turns between two contestants until the game ends.
pub struct Orchestrator<'a, S> {
    session: GameSession<S>,
    player_x: Box<dyn Contestant + 'a>,
    player_o: Box<dyn Contestant + 'a>,
}

impl<'a, S: GameStore> Orchestrator<'a, S> {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession<S>,
        player_x: Box<dyn Contestant + 'a>,
        player_o: Box<dyn Contestant + 'a>,
    ) -> Self {
        Self {
            session,
            player_x,
            player_o,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Hands the session back.
    pub fn into_session(self) -> GameSession<S> {
        self.session
    }

    /// Runs the game loop, reporting progress to `on_event`.
    ///
    /// A game that is already over is not replayed; its outcome is reported
    /// straight away.
    ///
    /// # Errors
    ///
    /// Fails if a contestant cannot produce a move, a non-human contestant
    /// makes an illegal one, or saving fails.
    #[instrument(skip(self, on_event))]
    pub fn run(&mut self, on_event: &mut dyn FnMut(GameEvent)) -> Result<Outcome> {
        info!("Starting game orchestration");
        on_event(GameEvent::StateChanged(self.session.state().board().display()));

        while !self.session.state().is_over() {
            let mark = *self.session.state().current_player();
            let player = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            if !player.is_human() {
                on_event(GameEvent::Thinking { name: name.clone() });
            }

            debug!(player = %name, "Waiting for move");
            let mv = player.next_move(self.session.state())?;

            match self.session.play(mv) {
                Ok(state) => {
                    let board = state.board().display();
                    on_event(GameEvent::MoveMade {
                        player: mark,
                        name,
                        mv,
                    });
                    on_event(GameEvent::StateChanged(board));
                }
                Err(SessionError::Move(err)) if player.is_human() => {
                    warn!(player = %name, error = %err, "Rejected move");
                    on_event(GameEvent::InvalidMove {
                        name,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err.into()),
            }
        }

        let outcome = *self.session.state().outcome();
        info!(%outcome, "Game over");
        on_event(GameEvent::GameOver {
            outcome,
            score: *self.session.score(),
        });
        Ok(outcome)
    }
}
