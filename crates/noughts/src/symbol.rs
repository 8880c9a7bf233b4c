//! Symbols, sides and the per-side score counter.

use crate::error::SymbolError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed on the board (e.g. `X` or `O`).
///
/// Symbols are non-empty tokens with surrounding whitespace removed.
/// Any token is accepted, so front ends may use emoji or letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
#[display("{}", _0)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from a token, rejecting blank input.
    #[instrument(skip(token))]
    pub fn new(token: impl AsRef<str>) -> Result<Self, SymbolError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SymbolError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the token, used for column alignment.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    fn literal(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// One of the two participants of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The human at the keyboard.
    Player,
    /// The engine's random mover.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Symbol assignment for both sides.
///
/// The two symbols are always distinct.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Symbols {
    /// Symbol written by the player.
    player: Symbol,
    /// Symbol written by the computer.
    computer: Symbol,
}

impl Symbols {
    /// Pairs two symbols, rejecting identical tokens.
    #[instrument]
    pub fn new(player: Symbol, computer: Symbol) -> Result<Self, SymbolError> {
        if player == computer {
            return Err(SymbolError::Identical(player));
        }
        Ok(Self { player, computer })
    }

    /// Parses and pairs two raw tokens.
    #[instrument(skip(player, computer))]
    pub fn parse(player: impl AsRef<str>, computer: impl AsRef<str>) -> Result<Self, SymbolError> {
        Self::new(Symbol::new(player)?, Symbol::new(computer)?)
    }

    /// Returns the symbol used by `side`.
    pub fn of(&self, side: Side) -> &Symbol {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Returns which side owns `symbol`, if either does.
    pub fn side_of(&self, symbol: &Symbol) -> Option<Side> {
        if *symbol == self.player {
            Some(Side::Player)
        } else if *symbol == self.computer {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Returns the assignment with the two symbols exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            player: self.computer.clone(),
            computer: self.player.clone(),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            player: Symbol::literal("X"),
            computer: Symbol::literal("O"),
        }
    }
}

/// Win counters for both sides.
///
/// Scores survive restarts; only the engine increments them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scores {
    /// Games won by the player.
    player: u32,
    /// Games won by the computer.
    computer: u32,
}

impl Scores {
    /// Returns the win count for `side`.
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub(crate) fn record_win(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}
