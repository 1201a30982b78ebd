//! TicTacPro - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;
use tictacpro::{
    AiPlayer, Contestant, GameEvent, GameMode, GameSession, GameStore, HumanPlayer,
    JsonFileStore, MemoryStore, Orchestrator, Settings,
};
use tictacpro_rules::{Difficulty, Outcome, Player};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "tictacpro.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(dir) = cli.state_dir {
        settings = settings.with_state_dir(dir);
    }

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            ai_mark,
            ai_delay_ms,
            seed,
            new,
            no_persist,
        } => {
            if let Some(mode) = mode {
                settings = settings.with_game_mode(mode);
            }
            if let Some(difficulty) = difficulty {
                settings = settings.with_difficulty(difficulty);
            }
            if let Some(ai_mark) = ai_mark {
                settings = settings.with_ai_mark(ai_mark);
            }
            if let Some(ms) = ai_delay_ms {
                settings = settings.with_ai_delay_ms(ms);
            }

            let rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };

            let store: Box<dyn GameStore> = if no_persist {
                Box::new(MemoryStore::new())
            } else {
                Box::new(JsonFileStore::new(settings.state_dir()))
            };
            run_play(settings, store, rng, new)
        }
        Command::Score { reset } => run_score(&settings, reset),
        Command::Reset => run_reset(&settings),
    }
}

/// Reads settings from `--config`, else `./tictacpro.toml` if it exists,
/// else defaults; then applies environment overrides.
#[instrument]
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Settings::from_file(DEFAULT_CONFIG)?,
        None => {
            debug!("No settings file, using defaults");
            Settings::default()
        }
    };
    Ok(settings.with_env_overrides()?)
}

/// Plays one game in the terminal.
///
/// With `new` the saved game is not read at all, so a damaged save does not
/// block starting over.
#[instrument(skip_all)]
fn run_play(settings: Settings, store: Box<dyn GameStore>, rng: ChaCha8Rng, new: bool) -> Result<()> {
    let mut session = if new {
        GameSession::start_fresh(settings.clone(), store)?
    } else {
        GameSession::load(settings.clone(), store)?
    };
    if session.state().is_over() {
        session.reset_game()?;
    }

    let mode = *session.state().mode();
    println!("TicTacPro - {} mode", mode);
    if mode == GameMode::Ai {
        println!("Difficulty: {}", settings.difficulty());
    }
    println!("Score  {}", session.score());
    println!();

    let ai_mark = (mode == GameMode::Ai).then_some(*settings.ai_mark());
    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let human = |mark: Player| -> Box<dyn Contestant> {
        Box::new(HumanPlayer::with_shared_input(
            format!("Player {}", mark),
            Rc::clone(&stdin),
            io::stdout(),
        ))
    };

    let (player_x, player_o) = match ai_mark {
        Some(mark) => {
            let ai: Box<dyn Contestant> = Box::new(
                AiPlayer::new(ai_name(*settings.difficulty()), *settings.difficulty(), mark, rng)
                    .with_delay(Duration::from_millis(*settings.ai_delay_ms())),
            );
            match mark {
                Player::X => (ai, human(Player::O)),
                Player::O => (human(Player::X), ai),
            }
        }
        None => (human(Player::X), human(Player::O)),
    };

    let mut orchestrator = Orchestrator::new(session, player_x, player_o);
    let outcome = orchestrator.run(&mut print_event)?;
    info!(%outcome, "Finished");
    Ok(())
}

fn ai_name(difficulty: Difficulty) -> String {
    format!("Computer ({})", difficulty)
}

fn print_event(event: GameEvent) {
    match event {
        GameEvent::StateChanged(board) => println!("\n{}\n", board),
        GameEvent::Thinking { name } => {
            print!("{} is thinking... ", name);
            io::stdout().flush().ok();
        }
        GameEvent::MoveMade { player, name, mv } => {
            println!("{} ({}) played row {}, column {}", name, player, mv.row, mv.col)
        }
        GameEvent::InvalidMove { name, reason } => println!("{}: {}. Try again.", name, reason),
        GameEvent::GameOver { outcome, score } => {
            match outcome {
                Outcome::Win { player, .. } => println!("Player {} wins!", player),
                Outcome::Draw => println!("It's a draw!"),
                Outcome::InProgress => {}
            }
            println!("Score  {}", score);
        }
    }
}

/// Prints (and optionally resets) the saved score.
#[instrument(skip(settings))]
fn run_score(settings: &Settings, reset: bool) -> Result<()> {
    let mut store = JsonFileStore::new(settings.state_dir());
    if reset {
        store.save_score(&Default::default())?;
        println!("Score reset.");
    }
    let score = store.load_score()?;
    println!("{}", score);
    println!(
        "Games: {}  X win rate: {:.1}%  O win rate: {:.1}%",
        score.total_games(),
        score.win_rate(Player::X),
        score.win_rate(Player::O)
    );
    Ok(())
}

/// Replaces the saved game with an empty board without reading it.
#[instrument(skip(settings))]
fn run_reset(settings: &Settings) -> Result<()> {
    let store = JsonFileStore::new(settings.state_dir());
    let session = GameSession::start_fresh(settings.clone(), store)?;
    println!("New game ready ({} mode).", session.state().mode());
    Ok(())
}
