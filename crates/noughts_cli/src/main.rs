//! Noughts - terminal front end
//!
//! Play three-in-a-row against a computer that picks random squares.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod command;
mod render;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use noughts::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = cli.engine_config()?;
    let engine = GameEngine::from_config(&config).context("building game engine")?;
    info!(size = engine.board().size(), computer_first = cli.computer_first, "Starting game");

    println!("Three in a row on a {0}×{0} board. Type `help` for commands.", engine.board().size());

    let mut app = App::new(engine, cli.computer_first, !cli.plain);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(stdin.lock(), stdout.lock())
}

/// Installs the tracing subscriber on stderr; stdout belongs to the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
