//! Tie detection.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a tie.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winning line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
