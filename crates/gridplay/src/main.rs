//! Gridplay - unified CLI.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, DEFAULT_LOG_FILE};
use gridplay::{Controller, GameConfig, parse_moves, run_script, run_terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(cli.size, cli.start, cli.policy);

    match cli.command {
        None => run_play(config, PathBuf::from(DEFAULT_LOG_FILE)),
        Some(Command::Play { log_file }) => run_play(config, log_file),
        Some(Command::Script {
            moves,
            restart_after,
            json,
        }) => run_scripted(config, &moves, restart_after, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive terminal game
fn run_play(config: GameConfig, log_file: PathBuf) -> Result<()> {
    // Log to a file so the alternate screen stays clean
    let log_file = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    config.validate()?;
    info!(?config, "Starting gridplay");
    let controller = Controller::mount(&config)?;
    run_terminal(&controller)
}

/// Run a scripted game and print the report
fn run_scripted(config: GameConfig, moves: &str, restart_after: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;
    let moves = parse_moves(moves)?;
    let report = run_script(&config, &moves, restart_after)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
