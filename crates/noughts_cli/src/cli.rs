//! Command-line interface for noughts.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::EngineConfig;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Noughts - play three-in-a-row against the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Three-in-a-row on an N×N board against a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML engine config (size, symbols, seed)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (overrides the config file)
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for the computer's moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Symbol for the player (overrides the config file)
    #[arg(long)]
    pub player_symbol: Option<String>,

    /// Symbol for the computer (overrides the config file)
    #[arg(long)]
    pub computer_symbol: Option<String>,

    /// Let the computer open every game
    #[arg(long)]
    pub computer_first: bool,

    /// Disable ANSI styling (dimmed squares are lowercased instead)
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Builds the engine config: file values first, then command-line overrides.
    #[instrument(skip(self))]
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(symbol) = &self.player_symbol {
            config = config.with_player_symbol(symbol.clone());
        }
        if let Some(symbol) = &self.computer_symbol {
            config = config.with_computer_symbol(symbol.clone());
        }

        debug!(?config, "Effective engine config");
        Ok(config)
    }
}
