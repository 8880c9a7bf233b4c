//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::board::Board;
use crate::state::GameState;

/// Invariant: board squares are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty board of the
/// same size and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let Ok(mut reconstructed) = Board::new(state.board().size()) else {
            return false;
        };

        for action in state.history() {
            // Fails if the square was already filled.
            if reconstructed.set(action.index, action.symbol.clone()).is_err() {
                return false;
            }
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are never overwritten and match the move history"
    }
}
