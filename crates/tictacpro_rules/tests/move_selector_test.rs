//! Tests for AI move selection across difficulty tiers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use tictacpro_rules::{Board, BoardEngine, Difficulty, Move, MoveSelector, Player, SelectError};

fn board(rows: &str) -> Board {
    rows.parse().expect("valid board")
}

#[test]
fn test_hard_blocks_diagonal_before_taking_center() {
    // X holds (0,0) and (1,1) and threatens (2,2).
    let b = board("XO. .X. ...");
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mv = MoveSelector::choose_move(&b, Difficulty::Hard, Player::O, Player::X, &mut rng)
            .unwrap();
        assert_eq!(mv, Move::new(2, 2));
    }
}

#[test]
fn test_hard_prefers_win_over_block() {
    // O can complete the top row at (0,2); X threatens (1,2) on the middle row.
    let b = board("OO. XX. O.X");
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mv = MoveSelector::choose_move(&b, Difficulty::Hard, Player::O, Player::X, &mut rng)
        .unwrap();
    assert_eq!(mv, Move::new(0, 2));
}

#[test]
fn test_medium_takes_immediate_win() {
    let b = board("X.. OO. X.X");
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mv = MoveSelector::choose_move(&b, Difficulty::Medium, Player::O, Player::X, &mut rng)
            .unwrap();
        assert_eq!(mv, Move::new(1, 2));
    }
}

#[test]
fn test_easy_is_roughly_uniform_over_two_moves() {
    // Exactly two empty squares: (0,2) and (2,2).
    let b = board("XO. OXO XO.");
    assert_eq!(BoardEngine::legal_moves(&b), vec![Move::new(0, 2), Move::new(2, 2)]);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let trials = 1000;
    let mut first = 0;
    for _ in 0..trials {
        let mv = MoveSelector::choose_move(&b, Difficulty::Easy, Player::O, Player::X, &mut rng)
            .unwrap();
        if mv == Move::new(0, 2) {
            first += 1;
        } else {
            assert_eq!(mv, Move::new(2, 2));
        }
    }

    let share = first as f64 / trials as f64;
    assert!((0.4..=0.6).contains(&share), "share of first move was {share}");
}

#[test]
fn test_full_board_has_no_move_at_any_difficulty() {
    let full = board("XOX OXO OXO");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for difficulty in Difficulty::iter() {
        assert_eq!(
            MoveSelector::choose_move(&full, difficulty, Player::O, Player::X, &mut rng),
            Err(SelectError::NoLegalMove)
        );
    }
}

#[test]
fn test_every_choice_is_legal() {
    let b = board("X.. .O. ..X");
    for difficulty in Difficulty::iter() {
        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mv = MoveSelector::choose_move(&b, difficulty, Player::O, Player::X, &mut rng)
                .unwrap();
            assert!(BoardEngine::legal_moves(&b).contains(&mv));
        }
    }
}

#[test]
fn test_same_seed_same_choice() {
    let b = Board::new();
    let pick = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        MoveSelector::choose_move(&b, Difficulty::Easy, Player::X, Player::O, &mut rng).unwrap()
    };
    assert_eq!(pick(99), pick(99));
}

#[test]
fn test_hard_answers_corner_opening_with_center() {
    let b = board("X.. ... ...");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mv = MoveSelector::choose_move(&b, Difficulty::Hard, Player::O, Player::X, &mut rng)
        .unwrap();
    assert_eq!(mv, Move::new(1, 1));
}
