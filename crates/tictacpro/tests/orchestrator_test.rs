//! Full games driven through the orchestrator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::io::{self, Cursor};
use std::rc::Rc;
use tictacpro::{
    AiPlayer, GameEvent, GameMode, GameSession, HumanPlayer, MemoryStore, Orchestrator, Settings,
};
use tictacpro_rules::{Difficulty, Move, Outcome, Player};

fn session() -> GameSession<MemoryStore> {
    let settings = Settings::default().with_game_mode(GameMode::TwoPlayer);
    GameSession::new(settings, MemoryStore::new())
}

#[test]
fn test_humans_at_one_keyboard() {
    // O first tries the taken corner and a nonsense entry.
    let input = Rc::new(RefCell::new(Cursor::new("1\n1\nzz\n4\n2\n5\n3\n")));
    let x = HumanPlayer::with_shared_input("Alice", Rc::clone(&input), io::sink());
    let o = HumanPlayer::with_shared_input("Bob", input, io::sink());

    let mut events = Vec::new();
    let mut orchestrator = Orchestrator::new(session(), Box::new(x), Box::new(o));
    let outcome = orchestrator.run(&mut |e| events.push(e)).unwrap();

    assert_eq!(outcome.winner(), Some(Player::X));
    let rejected: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::InvalidMove { .. }))
        .collect();
    assert_eq!(rejected.len(), 1);
    assert!(matches!(
        rejected[0],
        GameEvent::InvalidMove { name, .. } if name == "Bob"
    ));

    let moves: Vec<Move> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveMade { mv, .. } => Some(*mv),
            _ => None,
        })
        .collect();
    assert_eq!(
        moves,
        vec![
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(0, 2)
        ]
    );
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver { score, .. }) if score.wins(Player::X) == 1
    ));
}

#[test]
fn test_computer_against_computer() {
    for seed in 0..10 {
        let x = AiPlayer::new("Hard X", Difficulty::Hard, Player::X, ChaCha8Rng::seed_from_u64(seed));
        let o = AiPlayer::new("Easy O", Difficulty::Easy, Player::O, ChaCha8Rng::seed_from_u64(seed + 100));

        let mut thinking = 0;
        let mut orchestrator = Orchestrator::new(session(), Box::new(x), Box::new(o));
        let outcome = orchestrator
            .run(&mut |e| {
                if matches!(e, GameEvent::Thinking { .. }) {
                    thinking += 1;
                }
            })
            .unwrap();

        assert!(outcome.is_terminal());
        let session = orchestrator.into_session();
        assert_eq!(session.score().total_games(), 1);
        assert_eq!(thinking, session.state().board().squares().iter().filter(|s| s.mark().is_some()).count());
    }
}

#[test]
fn test_finished_game_is_not_replayed() {
    let mut session = session();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.play(Move::new(row, col)).unwrap();
    }

    // Nobody is asked for a move, so an empty input is fine.
    let x = HumanPlayer::new("X", Cursor::new(""), io::sink());
    let o = HumanPlayer::new("O", Cursor::new(""), io::sink());
    let mut orchestrator = Orchestrator::new(session, Box::new(x), Box::new(o));
    let outcome = orchestrator.run(&mut |_| {}).unwrap();

    assert!(matches!(outcome, Outcome::Win { player: Player::X, .. }));
    assert_eq!(orchestrator.session().score().total_games(), 1);
}

#[test]
fn test_closed_input_ends_run_with_error() {
    let x = HumanPlayer::new("X", Cursor::new("5\n"), io::sink());
    let o = HumanPlayer::new("O", Cursor::new(""), io::sink());
    let mut orchestrator = Orchestrator::new(session(), Box::new(x), Box::new(o));

    assert!(orchestrator.run(&mut |_| {}).is_err());
    assert_eq!(orchestrator.session().state().board().count(Player::X), 1);
}
