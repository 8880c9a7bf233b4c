//! Noughts - three-in-a-row game logic for N×N boards
//!
//! A human plays the computer on a square board. The engine enforces
//! strict alternation, rejects illegal moves without touching state,
//! and reports the winning line so a front end can highlight it.
//!
//! # Architecture
//!
//! - **Board**: row-major squares with a fill counter
//! - **Rules**: pure row → column → diagonal win scan and tie check
//! - **Contracts**: ordered move preconditions plus invariant postconditions
//! - **Engine**: turn enforcement, random computer moves, scores
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, Outcome, Symbols};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut game = GameEngine::with_rng(3, Symbols::default(), StdRng::seed_from_u64(7)).unwrap();
//! let result = game.attempt_player_move(4).unwrap();
//! if !result.completed() {
//!     game.computer_move().unwrap();
//! }
//! assert_eq!(game.outcome(), &Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod contracts;
mod engine;
mod error;
mod outcome;
mod state;
mod symbol;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board
pub use board::{Board, MAX_SIZE, STANDARD_SIZE, Square};

// Crate-level exports - Symbols and scoring
pub use symbol::{Scores, Side, Symbol, Symbols};

// Crate-level exports - Moves and outcomes
pub use action::Move;
pub use outcome::{Evaluation, MoveOutcome, Outcome, WinningLine};

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use state::GameState;

// Crate-level exports - Contracts
pub use contracts::{
    Contract, GameNotOver, InBounds, LegalMove, MoveContract, MoversTurn, SquareIsEmpty,
};

// Crate-level exports - Errors and configuration
pub use config::{ConfigError, EngineConfig};
pub use error::{BoardError, MoveError, SymbolError};
