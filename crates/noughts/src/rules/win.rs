//! Win detection for N×N boards.
//!
//! Lines are scanned rows first, then columns, then the two diagonals.
//! The first complete line found is reported.

use crate::board::Board;
use crate::outcome::WinningLine;
use tracing::{debug, instrument};

/// Checks if there is a winning line on the board.
///
/// Returns the first line found in row → column → diagonal order.
#[instrument(skip(board), fields(size = board.size(), filled = board.filled()))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    let line = check_rows(board)
        .or_else(|| check_columns(board))
        .or_else(|| check_diagonals(board));
    if let Some(line) = &line {
        debug!(symbol = %line.symbol(), indexes = ?line.indexes(), "Winning line found");
    }
    line
}

/// Scans each row left to right.
pub fn check_rows(board: &Board) -> Option<WinningLine> {
    let n = board.size();
    (0..n).find_map(|row| complete_line(board, (0..n).map(|col| row * n + col)))
}

/// Scans each column top to bottom.
pub fn check_columns(board: &Board) -> Option<WinningLine> {
    let n = board.size();
    (0..n).find_map(|col| complete_line(board, (0..n).map(|row| row * n + col)))
}

/// Scans the main diagonal (`0, n+1, 2(n+1), ...`) then the anti-diagonal
/// (`n-1, 2(n-1), ..., n(n-1)`).
pub fn check_diagonals(board: &Board) -> Option<WinningLine> {
    let n = board.size();
    complete_line(board, (0..n).map(|i| i * (n + 1)))
        .or_else(|| complete_line(board, (1..=n).map(|i| i * (n - 1))))
}

/// Returns the line if every index holds the same non-empty symbol.
///
/// Indexes are reported in the order given.
fn complete_line(board: &Board, indexes: impl Iterator<Item = usize>) -> Option<WinningLine> {
    let indexes: Vec<usize> = indexes.collect();
    let (&first, rest) = indexes.split_first()?;
    let symbol = board.symbol_at(first)?;
    if rest.iter().all(|&index| board.symbol_at(index) == Some(symbol)) {
        Some(WinningLine::new(symbol.clone(), indexes))
    } else {
        None
    }
}
