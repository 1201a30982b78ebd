//! Running tally of finished games.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictacpro_rules::{Outcome, Player};
use tracing::instrument;

/// Win and draw counters, persisted as `{"playerX", "playerO", "draws"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    player_x: u32,
    player_o: u32,
    draws: u32,
}

impl Score {
    /// Creates a score with the given counters.
    pub fn new(player_x: u32, player_o: u32, draws: u32) -> Self {
        Self {
            player_x,
            player_o,
            draws,
        }
    }

    /// Returns the score with one more result counted.
    ///
    /// `InProgress` leaves the score unchanged.
    #[instrument(skip(self))]
    pub fn record(self, outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Win {
                player: Player::X, ..
            } => Self {
                player_x: self.player_x.saturating_add(1),
                ..self
            },
            Outcome::Win {
                player: Player::O, ..
            } => Self {
                player_o: self.player_o.saturating_add(1),
                ..self
            },
            Outcome::Draw => Self {
                draws: self.draws.saturating_add(1),
                ..self
            },
            Outcome::InProgress => self,
        }
    }

    /// Returns an all-zero score.
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Number of games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.player_x,
            Player::O => self.player_o,
        }
    }

    /// Number of finished games.
    pub fn total_games(&self) -> u32 {
        self.player_x
            .saturating_add(self.player_o)
            .saturating_add(self.draws)
    }

    /// Calculates the win rate of `player` as a percentage (0.0–100.0).
    pub fn win_rate(&self, player: Player) -> f64 {
        let total = self.total_games();
        if total == 0 {
            0.0
        } else {
            (self.wins(player) as f64 / total as f64) * 100.0
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.player_x, self.player_o, self.draws
        )
    }
}
