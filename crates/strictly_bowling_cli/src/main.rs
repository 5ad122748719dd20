//! Strictly Bowling - Unified CLI
//!
//! Scores ten-pin bowling games from the command line.

#![warn(missing_docs)]

mod cli;
mod game_file;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, RollsInput};
use game_file::GameFile;
use strictly_bowling::{BowlingGame, format_rolls, parse_rolls};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Score { input, json } => run_score(input, json),
        Command::Replay { file, json } => run_replay(file, json),
        Command::Check { input, next } => run_check(input, next),
    }
}

/// Score rolls given on the command line
#[instrument(skip(input))]
fn run_score(input: RollsInput, json: bool) -> Result<()> {
    let rolls = resolve_input(input)?;
    let game = BowlingGame::replay(&rolls).context("Rolls do not form a valid game")?;
    print_game("Bowler", &game, json)
}

/// Replay a stored game file
#[instrument(skip_all, fields(path = %file.display()))]
fn run_replay(file: std::path::PathBuf, json: bool) -> Result<()> {
    let game_file = GameFile::from_file(&file)?;
    let rolls = game_file.resolve_rolls()?;
    let game = BowlingGame::replay(&rolls)
        .with_context(|| format!("Game in {} is not valid", file.display()))?;
    print_game(game_file.bowler(), &game, json)
}

/// Report whether one more roll would be accepted
#[instrument(skip(input))]
fn run_check(input: RollsInput, next: i32) -> Result<()> {
    let rolls = resolve_input(input)?;
    let game = BowlingGame::replay(&rolls).context("Rolls do not form a valid game")?;

    let mut trial = game.clone();
    match trial.roll(next) {
        Ok(()) => {
            info!(next, "Roll accepted");
            println!("{} pins: accepted (score would be {})", next, trial.score());
        }
        Err(e) => {
            warn!(next, error = %e, kind = %e.kind(), "Roll rejected");
            println!("{} pins: rejected ({}: {})", next, e.kind(), e);
        }
    }
    Ok(())
}

#[instrument(skip(input))]
fn resolve_input(input: RollsInput) -> Result<Vec<i32>> {
    match input.notation {
        Some(notation) => parse_rolls(&notation).context("Invalid notation"),
        None => Ok(input.rolls),
    }
}

fn print_game(bowler: &str, game: &BowlingGame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(game)?);
        return Ok(());
    }

    println!("{}: {}", bowler, format_rolls(game));
    println!("Score: {} ({})", game.score(), game.status());
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_bowling=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
