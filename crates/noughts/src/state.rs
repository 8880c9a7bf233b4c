//! Per-game state: board, turn tracking, outcome and move history.

use crate::action::Move;
use crate::board::Board;
use crate::error::BoardError;
use crate::outcome::Outcome;
use crate::symbol::Symbol;
use serde::Serialize;
use tracing::instrument;

/// State of the game currently being played.
///
/// Everything here is cleared by a restart; scores and symbols live on
/// the engine instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    last_mover: Option<Symbol>,
    outcome: Outcome,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game on `board`.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            last_mover: None,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol of whoever moved most recently.
    pub fn last_mover(&self) -> Option<&Symbol> {
        self.last_mover.as_ref()
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the moves accepted in this game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move (unchecked beyond board guards; use the contract first).
    #[instrument(skip(self))]
    pub(crate) fn apply_move(&mut self, action: Move) -> Result<(), BoardError> {
        self.board.set(action.index, action.symbol.clone())?;
        self.last_mover = Some(action.symbol.clone());
        self.history.push(action);
        Ok(())
    }

    /// Sets the game outcome.
    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Empties the board and forgets turns, outcome and history.
    pub(crate) fn reset(&mut self) {
        self.board.reset();
        self.last_mover = None;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
