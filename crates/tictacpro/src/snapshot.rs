//! Persisted form of a game in progress.

use crate::GameMode;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictacpro_rules::{Board, Player};

/// JSON-compatible game record exchanged with a [`GameStore`](crate::GameStore).
///
/// ```json
/// {
///   "board": [["X", "", ""], ["", "O", ""], ["", "", ""]],
///   "currentPlayer": "X",
///   "winner": null,
///   "winningCells": null,
///   "isDraw": false,
///   "gameMode": "ai"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Board as a 3x3 grid of `""`, `"X"`, `"O"`.
    pub board: Board,
    /// Player to move next.
    pub current_player: Player,
    /// Winner, if the game was won.
    #[serde(default)]
    pub winner: Option<Player>,
    /// Board indices (0-8) of the winning line, if any.
    #[serde(default)]
    pub winning_cells: Option<Vec<usize>>,
    /// Whether the game ended in a draw.
    #[serde(default)]
    pub is_draw: bool,
    /// Mode the game was played in.
    #[serde(default)]
    pub game_mode: GameMode,
}
