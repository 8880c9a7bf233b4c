//! Fill-count invariant: the board's counter matches its squares.

use super::Invariant;
use crate::board::Square;
use crate::state::GameState;

/// Invariant: `filled` equals the number of occupied squares and the
/// number of moves in history.
pub struct FillCountInvariant;

impl Invariant<GameState> for FillCountInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let occupied = board
            .squares()
            .iter()
            .filter(|square| **square != Square::Empty)
            .count();

        board.filled() == occupied && occupied == state.history().len()
    }

    fn description() -> &'static str {
        "Fill count matches occupied squares and history length"
    }
}
