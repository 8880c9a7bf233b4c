//! First-class move type.
//!
//! Moves are domain events, not side effects. They record who placed
//! which symbol where, and can be validated before they are applied.

use crate::symbol::{Side, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A side placing its symbol at a board index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The symbol written.
    pub symbol: Symbol,
    /// Row-major index of the target square.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(side: Side, symbol: Symbol, index: usize) -> Self {
        Self {
            side,
            symbol,
            index,
        }
    }

    /// Returns the side making this move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the symbol written by this move.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the target index.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.side, self.symbol, self.index)
    }
}
