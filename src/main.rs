//! Strictly Hanoi - Unified CLI
//!
//! Animated Tower of Hanoi with autonomous and manual modes.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use serde_json::json;
use strictly_hanoi::{HanoiConfig, Mode, move_count, plan};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Auto(args) => tui::run_tui(load_config(&args)?, Mode::Auto).await,
        Command::Manual(args) => tui::run_tui(load_config(&args)?, Mode::Manual).await,
        Command::Plan { game, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            print_plan(&load_config(&game)?, json)
        }
    }
}

/// Loads the config file (if any) and applies command-line overrides.
#[instrument]
fn load_config(args: &GameArgs) -> Result<HanoiConfig> {
    let mut config = match &args.config {
        Some(path) => HanoiConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => HanoiConfig::default(),
    };

    if let Some(discs) = args.discs {
        config = config.with_disc_count(discs);
    }
    if let Some(step) = args.step {
        config = config.with_step(step);
    }

    config.validate().context("Invalid configuration")?;
    info!(?config, "Configuration ready");
    Ok(config)
}

/// Prints the optimal plan for the configured disc count.
#[instrument(skip(config))]
fn print_plan(config: &HanoiConfig, as_json: bool) -> Result<()> {
    let source = *config.source();
    let destination = *config.destination();
    let moves = plan(source, source.third(destination), destination, *config.disc_count());

    if as_json {
        let document = json!({
            "disc_count": config.disc_count(),
            "source": source,
            "destination": destination,
            "move_count": move_count(*config.disc_count()),
            "moves": moves,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        for (i, mv) in moves.iter().enumerate() {
            let (from, to) = mv.as_indices();
            println!("{:>4}. {} ({} -> {})", i + 1, mv, from + 1, to + 1);
        }
        println!("{} moves", moves.len());
    }

    Ok(())
}
