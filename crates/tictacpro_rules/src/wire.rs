//! Board interchange formats.
//!
//! Collaborators exchange boards as a 3x3 array of `""`, `"X"` and `"O"`
//! strings. Tests and the terminal front end also use a compact text form
//! where `.` (or `-`, `_`) marks an empty square and whitespace, `/` and `|`
//! are ignored, e.g. `"XO. .X. ..O"`.

use super::position::Position;
use super::types::{Board, Player, Square};
use std::str::FromStr;

/// Row-major 3x3 grid, the shape boards take on the wire.
pub type Rows = [[Square; 3]; 3];

/// Error parsing a square symbol or a compact board string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A square symbol other than `""`, `"X"` or `"O"`.
    #[display("Invalid square symbol {:?}", _0)]
    InvalidSymbol(String),

    /// The compact form did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

impl TryFrom<String> for Square {
    type Error = ParseBoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Square {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Player::X)),
            "O" => Ok(Square::Occupied(Player::O)),
            other => Err(ParseBoardError::InvalidSymbol(other.to_string())),
        }
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.symbol().to_string()
    }
}

impl Board {
    /// Builds a board from row-major rows.
    pub fn from_rows(rows: Rows) -> Self {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, rows[pos.row()][pos.col()]);
        }
        board
    }

    /// Returns the board as row-major rows.
    pub fn to_rows(&self) -> Rows {
        let mut rows = [[Square::Empty; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos);
        }
        rows
    }

    /// Returns the board as a 3x3 grid of wire symbols.
    pub fn to_symbols(&self) -> [[&'static str; 3]; 3] {
        self.to_rows().map(|row| row.map(Square::symbol))
    }
}

impl From<Rows> for Board {
    fn from(rows: Rows) -> Self {
        Board::from_rows(rows)
    }
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' => Ok(Square::Empty),
                other => Err(ParseBoardError::InvalidSymbol(other.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if squares.len() != 9 {
            return Err(ParseBoardError::WrongLength(squares.len()));
        }

        let mut board = Board::new();
        for (pos, square) in Position::ALL.into_iter().zip(squares) {
            board.set(pos, square);
        }
        Ok(board)
    }
}
