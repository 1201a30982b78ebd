//! Tests for the JSON board shape shared with persistence collaborators.

use serde_json::json;
use tictacpro_rules::{Board, Player, Position, Square};

#[test]
fn test_board_serializes_as_string_grid() {
    let board: Board = "X.O .X. ...".parse().unwrap();
    let value = serde_json::to_value(board).unwrap();
    assert_eq!(
        value,
        json!([["X", "", "O"], ["", "X", ""], ["", "", ""]])
    );
}

#[test]
fn test_board_deserializes_from_string_grid() {
    let value = json!([["", "", ""], ["", "O", ""], ["X", "", ""]]);
    let board: Board = serde_json::from_value(value).unwrap();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Player::X));
    assert_eq!(board.count(Player::X), 1);
}

#[test]
fn test_board_rejects_unknown_symbol() {
    let value = json!([["Z", "", ""], ["", "", ""], ["", "", ""]]);
    let err = serde_json::from_value::<Board>(value).unwrap_err();
    assert!(err.to_string().contains("Invalid square symbol"));
}

#[test]
fn test_board_rejects_wrong_shape() {
    let value = json!([["", "", ""], ["", "", ""]]);
    assert!(serde_json::from_value::<Board>(value).is_err());
}

#[test]
fn test_player_serializes_as_letter() {
    assert_eq!(serde_json::to_value(Player::O).unwrap(), json!("O"));
}
