//! Command-line interface for tictacpro.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictacpro::GameMode;
use tictacpro_rules::{Difficulty, Player};

/// TicTacPro - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictacpro")]
#[command(about = "Tic-tac-toe with score keeping and a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a settings file (TOML). Defaults to ./tictacpro.toml if present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for the saved game and score
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game (resumes an unfinished one in the same mode)
    Play {
        /// two-player or ai
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark the computer plays (X or O)
        #[arg(long)]
        ai_mark: Option<Player>,

        /// Pause before the computer answers, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Start a new game even if one is saved
        #[arg(long)]
        new: bool,

        /// Keep everything in memory; nothing is read or written
        #[arg(long)]
        no_persist: bool,
    },

    /// Show the score
    Score {
        /// Zero the score
        #[arg(long)]
        reset: bool,
    },

    /// Discard the saved game
    Reset,
}
