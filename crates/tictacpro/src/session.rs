//! Game session: the current game, the score, and where they are saved.

use crate::{GameMode, GameState, GameStore, Score, SessionError, Settings};
use rand::Rng;
use tictacpro_rules::{Difficulty, Move, MoveSelector, Outcome};
use tracing::{debug, info, instrument, warn};

/// Drives one board at a time and keeps the store in step.
///
/// Every state change is saved immediately. When a game ends its outcome is
/// added to the score exactly once.
#[derive(Debug)]
pub struct GameSession<S> {
    state: GameState,
    score: Score,
    settings: Settings,
    store: S,
}

impl<S: GameStore> GameSession<S> {
    /// Starts a fresh game in the configured mode with a zero score.
    ///
    /// Nothing is read from or written to the store until the first change.
    #[instrument(skip_all)]
    pub fn new(settings: Settings, store: S) -> Self {
        info!(mode = %settings.game_mode(), "Creating GameSession");
        Self {
            state: GameState::new(*settings.game_mode()),
            score: Score::default(),
            settings,
            store,
        }
    }

    /// Keeps the saved score but replaces any saved game with an empty board.
    ///
    /// The saved game is never read, so this also recovers from a game file
    /// that fails validation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the score cannot be loaded or the
    /// new game cannot be saved.
    #[instrument(skip_all)]
    pub fn start_fresh(settings: Settings, mut store: S) -> Result<Self, SessionError> {
        let score = store.load_score()?;
        let state = GameState::new(*settings.game_mode());
        store.save_game_state(&state.snapshot())?;
        info!(mode = %state.mode(), "Started fresh game");

        Ok(Self {
            state,
            score,
            settings,
            store,
        })
    }

    /// Restores the saved game and score.
    ///
    /// A saved game played in a different mode than the settings ask for is
    /// replaced by a fresh game in the configured mode.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if loading fails and
    /// [`SessionError::Snapshot`] if the saved game is inconsistent.
    #[instrument(skip_all)]
    pub fn load(settings: Settings, store: S) -> Result<Self, SessionError> {
        let mode = *settings.game_mode();
        let score = store.load_score()?;

        let state = match store.load_game_state()? {
            Some(snapshot) => {
                let saved = GameState::from_snapshot(&snapshot)?;
                if *saved.mode() == mode {
                    info!(over = saved.is_over(), "Resuming saved game");
                    saved
                } else {
                    debug!(saved = %saved.mode(), wanted = %mode, "Saved game is in another mode");
                    GameState::new(mode)
                }
            }
            None => GameState::new(mode),
        };

        Ok(Self {
            state,
            score,
            settings,
            store,
        })
    }

    /// Current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns true when the computer should move next.
    pub fn is_ai_turn(&self) -> bool {
        *self.state.mode() == GameMode::Ai
            && !self.state.is_over()
            && self.state.current_player() == self.settings.ai_mark()
    }

    /// Plays `mv` for whoever's turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] after the game has ended,
    /// [`SessionError::Move`] for an illegal move, or
    /// [`SessionError::Store`] if saving fails.
    #[instrument(skip(self))]
    pub fn play(&mut self, mv: Move) -> Result<&GameState, SessionError> {
        let next = self.state.play(mv)?;
        self.commit(next)?;
        Ok(&self.state)
    }

    /// Asks the selector for the computer's move and plays it.
    ///
    /// Random choices are drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAiTurn`] outside AI mode or on the human's
    /// turn, plus anything [`GameSession::play`] can return.
    #[instrument(skip(self, rng))]
    pub fn ai_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, SessionError> {
        if !self.is_ai_turn() {
            warn!("AI move requested out of turn");
            return Err(SessionError::NotAiTurn);
        }

        let ai = *self.settings.ai_mark();
        let mv = MoveSelector::choose_move(
            self.state.board(),
            *self.settings.difficulty(),
            ai,
            ai.opponent(),
            rng,
        )?;
        self.play(mv)?;
        Ok(mv)
    }

    /// Clears the board and starts over in the current mode.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if saving fails.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> Result<&GameState, SessionError> {
        info!("Starting new game");
        self.state = self.state.restarted();
        self.store.save_game_state(&self.state.snapshot())?;
        Ok(&self.state)
    }

    /// Zeroes the score.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if saving fails.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) -> Result<&Score, SessionError> {
        info!("Resetting score");
        self.score = self.score.reset();
        self.store.save_score(&self.score)?;
        Ok(&self.score)
    }

    /// Switches between two-player and AI mode and starts a new game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if saving fails.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) -> Result<GameMode, SessionError> {
        let mode = self.state.mode().toggled();
        info!(%mode, "Switching mode");
        self.settings = self.settings.clone().with_game_mode(mode);
        self.state = GameState::new(mode);
        self.store.save_game_state(&self.state.snapshot())?;
        Ok(mode)
    }

    /// Changes the AI strength for later moves.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings = self.settings.clone().with_difficulty(difficulty);
    }

    /// Consumes the session, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: GameState) -> Result<(), SessionError> {
        let finished = !self.state.is_over() && next.is_over();
        self.state = next;
        self.store.save_game_state(&self.state.snapshot())?;

        if finished {
            let outcome: Outcome = *self.state.outcome();
            info!(%outcome, "Game finished");
            self.score = self.score.record(&outcome);
            self.store.save_score(&self.score)?;
        }
        Ok(())
    }
}
