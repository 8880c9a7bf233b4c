//! Alternating turn invariant: no symbol moves twice in a row.

use super::Invariant;
use crate::state::GameState;

/// Invariant: consecutive moves carry different symbols.
///
/// Either side may open a game; after that the history must alternate,
/// and the recorded last mover must be the author of the latest move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history
            .windows(2)
            .any(|pair| pair[0].symbol == pair[1].symbol)
        {
            return false;
        }

        state.last_mover() == history.last().map(|action| &action.symbol)
    }

    fn description() -> &'static str {
        "Symbols alternate turns and the last mover matches history"
    }
}
