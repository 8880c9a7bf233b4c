//! Game rules for three-in-a-row.
//!
//! Pure functions over a read-only board. Rules are separated from
//! board storage so the engine and the contracts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{check_columns, check_diagonals, check_rows, check_winner};

use crate::board::Board;
use crate::outcome::Evaluation;
use tracing::instrument;

/// Evaluates the board after a move: a line wins, otherwise a full board ties.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(line) = check_winner(board) {
        Evaluation::Win(line)
    } else if is_full(board) {
        Evaluation::Tie
    } else {
        Evaluation::Open
    }
}
