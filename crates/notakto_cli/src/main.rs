//! Notakto - command-line driver for the game engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod output;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use notakto::{MoveSelector, Position, SeededSelector, human_move, is_game_over};
use output::{Evaluation, Turn};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(cli.seed, cli.json);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::New { boards } => run_new(&config, boards),
        Command::Evaluate { boards } => run_evaluate(&config, &boards),
        Command::Reply { boards } => run_reply(&config, &boards),
        Command::Play {
            board,
            square,
            boards,
        } => run_play(&config, &boards, board, square),
    }
}

/// Print a start position
#[instrument(skip(config))]
fn run_new(config: &CliConfig, boards: Option<usize>) -> Result<()> {
    let count = boards.unwrap_or(*config.boards());
    let position = Position::new(count)?;
    info!(boards = count, "New game");
    emit(config, &position, || format!("{}\n", position))
}

/// Evaluate a position
#[instrument(skip(config))]
fn run_evaluate(config: &CliConfig, boards: &[String]) -> Result<()> {
    let position = Position::parse(boards).context("Invalid position")?;
    let evaluation = Evaluation::of(&position);
    emit(config, &evaluation, || evaluation.text())
}

/// Let the computer answer a position
#[instrument(skip(config))]
fn run_reply(config: &CliConfig, boards: &[String]) -> Result<()> {
    let position = Position::parse(boards).context("Invalid position")?;
    if is_game_over(&position) {
        bail!("Every board is already dead");
    }
    let reply = selector(config).select(&position)?;
    let turn = Turn::computer_replied(reply);
    emit(config, &turn, || turn.text())
}

/// Play the human's move and the computer's answer
#[instrument(skip(config))]
fn run_play(config: &CliConfig, boards: &[String], board: usize, square: usize) -> Result<()> {
    let position = Position::parse(boards).context("Invalid position")?;
    if is_game_over(&position) {
        bail!("Every board is already dead");
    }

    let after_human = match human_move(&position, board, square) {
        Ok(next) => next,
        Err(err) if err.is_illegal_move() => {
            warn!(%err, "Illegal move");
            bail!("Illegal move: {}", err.kind());
        }
        Err(err) => return Err(err.into()),
    };

    let turn = if is_game_over(&after_human) {
        Turn::human_finished(after_human)
    } else {
        Turn::computer_replied(selector(config).select(&after_human)?)
    };
    emit(config, &turn, || turn.text())
}

fn selector(config: &CliConfig) -> SeededSelector {
    match config.seed() {
        Some(seed) => MoveSelector::seeded(*seed),
        None => MoveSelector::from_entropy(),
    }
}

fn emit<T: Serialize>(config: &CliConfig, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if *config.json() {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
