//! Session behaviour against the in-memory store.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictacpro::{
    GameMode, GameSession, GameSnapshot, GameStore, MemoryStore, Score, SessionError, Settings,
};
use tictacpro_rules::{Board, Difficulty, Move, Outcome, Player};

fn two_player() -> GameSession<MemoryStore> {
    let settings = Settings::default().with_game_mode(GameMode::TwoPlayer);
    GameSession::new(settings, MemoryStore::new())
}

fn play_all(session: &mut GameSession<MemoryStore>, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session.play(Move::new(row, col)).unwrap();
    }
}

// X takes the top row while O fills the middle.
const X_WINS_TOP_ROW: [(usize, usize); 5] = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];

#[test]
fn test_win_is_counted_once() {
    let mut session = two_player();
    play_all(&mut session, &X_WINS_TOP_ROW);

    assert!(session.state().is_over());
    assert_eq!(session.state().outcome().winner(), Some(Player::X));
    assert_eq!(session.score().wins(Player::X), 1);
    assert_eq!(session.score().total_games(), 1);

    // Further moves are refused and do not touch the score.
    let err = session.play(Move::new(2, 2)).unwrap_err();
    assert!(matches!(err, SessionError::GameOver));
    assert_eq!(session.score().total_games(), 1);
    assert_eq!(session.store().load_score().unwrap(), *session.score());
}

#[test]
fn test_draw_is_counted() {
    let mut session = two_player();
    // X O X / O O X / X X O
    play_all(
        &mut session,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (1, 1), (2, 0), (2, 2), (2, 1)],
    );
    assert_eq!(*session.state().outcome(), Outcome::Draw);
    assert_eq!(*session.score().draws(), 1);
    assert_eq!(session.score().wins(Player::X), 0);
}

#[test]
fn test_every_move_is_saved() {
    let mut session = two_player();
    session.play(Move::new(1, 1)).unwrap();
    session.play(Move::new(0, 0)).unwrap();

    let saved = session.store().load_game_state().unwrap().unwrap();
    assert_eq!(saved, session.state().snapshot());
    assert_eq!(saved.current_player, Player::X);
    assert_eq!(session.store().saves(), 2);
}

#[test]
fn test_illegal_move_changes_nothing() {
    let mut session = two_player();
    session.play(Move::new(1, 1)).unwrap();
    let before = *session.state();

    assert!(matches!(
        session.play(Move::new(1, 1)),
        Err(SessionError::Move(_))
    ));
    assert!(matches!(
        session.play(Move::new(3, 0)),
        Err(SessionError::Move(_))
    ));
    assert_eq!(*session.state(), before);
    assert_eq!(session.store().saves(), 1);
}

#[test]
fn test_reset_game_keeps_score() {
    let mut session = two_player();
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.reset_game().unwrap();

    assert_eq!(*session.state().board(), Board::new());
    assert_eq!(*session.state().current_player(), Player::X);
    assert_eq!(session.score().wins(Player::X), 1);

    session.reset_score().unwrap();
    assert_eq!(*session.score(), Score::default());
    assert_eq!(session.store().load_score().unwrap(), Score::default());
}

#[test]
fn test_load_resumes_saved_game() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let snapshot = GameSnapshot::new(board, Player::X, None, None, false, GameMode::TwoPlayer);
    let store = MemoryStore::with_contents(Some(snapshot), Score::new(2, 1, 0));

    let settings = Settings::default().with_game_mode(GameMode::TwoPlayer);
    let session = GameSession::load(settings, store).unwrap();

    assert_eq!(*session.state().board(), board);
    assert_eq!(*session.state().current_player(), Player::X);
    assert_eq!(session.score().wins(Player::X), 2);
}

#[test]
fn test_load_in_other_mode_starts_fresh() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let snapshot = GameSnapshot::new(board, Player::X, None, None, false, GameMode::TwoPlayer);
    let store = MemoryStore::with_contents(Some(snapshot), Score::default());

    let settings = Settings::default().with_game_mode(GameMode::Ai);
    let session = GameSession::load(settings, store).unwrap();

    assert_eq!(*session.state().board(), Board::new());
    assert_eq!(*session.state().mode(), GameMode::Ai);
}

#[test]
fn test_load_rejects_inconsistent_game() {
    // Two X marks, no O, but O is not the one to move.
    let board: Board = "XX. ... ...".parse().unwrap();
    let snapshot = GameSnapshot::new(board, Player::X, None, None, false, GameMode::TwoPlayer);
    let store = MemoryStore::with_contents(Some(snapshot), Score::default());

    let result = GameSession::load(Settings::default(), store);
    assert!(matches!(result, Err(SessionError::Snapshot(_))));
}

#[test]
fn test_start_fresh_ignores_inconsistent_game() {
    let board: Board = "XX. ... ...".parse().unwrap();
    let snapshot = GameSnapshot::new(board, Player::X, None, None, false, GameMode::TwoPlayer);
    let store = MemoryStore::with_contents(Some(snapshot), Score::new(0, 3, 1));

    let session = GameSession::start_fresh(Settings::default(), store).unwrap();
    assert_eq!(*session.state().board(), Board::new());
    assert_eq!(session.score().wins(Player::O), 3);

    let store = session.into_store();
    assert_eq!(store.saves(), 1);
    let saved = store.load_game_state().unwrap().unwrap();
    assert_eq!(saved.board, Board::new());
    assert_eq!(saved.current_player, Player::X);
}

#[test]
fn test_ai_plays_as_x() {
    let settings = Settings::default()
        .with_game_mode(GameMode::Ai)
        .with_ai_mark(Player::X)
        .with_difficulty(Difficulty::Hard);
    let mut session = GameSession::new(settings, MemoryStore::new());
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    assert!(session.is_ai_turn());
    assert_eq!(session.ai_move(&mut rng).unwrap(), Move::new(1, 1));
    assert!(!session.is_ai_turn());
    assert!(matches!(session.ai_move(&mut rng), Err(SessionError::NotAiTurn)));
}

#[test]
fn test_ai_game_runs_to_the_end() {
    let settings = Settings::default()
        .with_game_mode(GameMode::Ai)
        .with_difficulty(Difficulty::Easy);
    let mut session = GameSession::new(settings, MemoryStore::new());
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    // Human (X) always takes the first free cell.
    while !session.state().is_over() {
        if session.is_ai_turn() {
            session.ai_move(&mut rng).unwrap();
        } else {
            let board = *session.state().board();
            let mv = tictacpro_rules::BoardEngine::legal_moves(&board)[0];
            session.play(mv).unwrap();
        }
    }

    assert_eq!(session.score().total_games(), 1);
    assert!(matches!(
        session.ai_move(&mut rng),
        Err(SessionError::NotAiTurn)
    ));
}

#[test]
fn test_difficulty_change_applies() {
    let mut session = two_player();
    session.set_difficulty(Difficulty::Medium);
    assert_eq!(*session.settings().difficulty(), Difficulty::Medium);
}

#[test]
fn test_ai_moves_follow_the_callers_rng() {
    let settings = Settings::default()
        .with_game_mode(GameMode::Ai)
        .with_ai_mark(Player::X)
        .with_difficulty(Difficulty::Easy);

    let replies: Vec<Move> = (0..2)
        .map(|_| {
            let mut session = GameSession::new(settings.clone(), MemoryStore::new());
            session.ai_move(&mut ChaCha8Rng::seed_from_u64(42)).unwrap()
        })
        .collect();
    assert_eq!(replies[0], replies[1]);
}
