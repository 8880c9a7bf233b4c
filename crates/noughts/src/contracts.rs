//! Contract-based move validation.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, move)} apply {Q(before, after)}`.

use crate::action::Move;
use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::state::GameState;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or tied.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the outcome is settled.
    pub fn check(_mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.outcome().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index addresses a square on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with [`MoveError::OutOfRange`] past the last square.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        let len = state.board().cell_count();
        if mov.index >= len {
            Err(MoveError::OutOfRange {
                index: mov.index,
                len,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SlotOccupied`] on a filled square.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(mov.index) {
            Ok(())
        } else {
            Err(MoveError::SlotOccupied(mov.index))
        }
    }
}

/// Precondition: the symbol did not make the previous move.
///
/// A fresh game has no last mover, so either side may open.
pub struct MoversTurn;

impl MoversTurn {
    /// Fails with [`MoveError::OutOfTurn`] on a double move.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.last_mover() == Some(&mov.symbol) {
            Err(MoveError::OutOfTurn(mov.symbol.clone()))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in a fixed order: game over, bounds,
/// occupancy, then turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(mov, state)?;
        InBounds::check(mov, state)?;
        SquareIsEmpty::check(mov, state)?;
        MoversTurn::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - exactly one more square is filled than before
/// - board remains monotonic
/// - symbols still alternate
/// - fill count stays consistent
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.board().filled() != before.board().filled() + 1 {
            warn!(
                before = before.board().filled(),
                after = after.board().filled(),
                "Move did not fill exactly one square"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must fill exactly one square".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
