//! Error types for board access, moves and symbol assignment.

use crate::symbol::Symbol;

/// Error raised by direct board access.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Index lies outside the board.
    #[display("Index {} is outside a board of {} squares", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of squares on the board.
        len: usize,
    },

    /// Target square already holds a symbol.
    #[display("Square {} is already occupied", _0)]
    AlreadyOccupied(usize),

    /// Boards must have at least one row.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// Side length past [`MAX_SIZE`](crate::MAX_SIZE).
    #[display("Board size {} exceeds the maximum of {}", size, max)]
    TooLarge {
        /// Requested side length.
        size: usize,
        /// Largest accepted side length.
        max: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// Index lies outside the board.
    #[display("Index {} is outside a board of {} squares", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of squares on the board.
        len: usize,
    },

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SlotOccupied(usize),

    /// The symbol moved last and must wait for the opponent.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Symbol),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange { index, len } => MoveError::OutOfRange { index, len },
            BoardError::AlreadyOccupied(index) => MoveError::SlotOccupied(index),
            BoardError::ZeroSize | BoardError::TooLarge { .. } => {
                MoveError::InvariantViolation(err.to_string())
            }
        }
    }
}

/// Error raised when assigning symbols to the two sides.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SymbolError {
    /// A symbol was blank.
    #[display("Symbols must not be empty")]
    Empty,

    /// Both sides were given the same symbol.
    #[display("Player and computer cannot both use {}", _0)]
    Identical(Symbol),

    /// Symbols can only change before the first move or after the game ends.
    #[display("Symbols cannot change while a game is in progress")]
    GameInProgress,
}

impl std::error::Error for SymbolError {}
