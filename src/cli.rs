//! Command-line interface for strictly_hanoi.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hanoi - animated Tower of Hanoi with checked rules
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Animated Tower of Hanoi in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Watch the optimal solution play itself (press 's' to start)
    Auto(GameArgs),

    /// Move the discs yourself (press '1', '2', '3' to select pegs)
    Manual(GameArgs),

    /// Print the optimal plan without animating it
    Plan {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of discs (overrides the config file)
    #[arg(short, long)]
    pub discs: Option<usize>,

    /// Distance a disc moves per frame (overrides the config file)
    #[arg(short, long)]
    pub step: Option<u32>,
}
