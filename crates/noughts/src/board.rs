//! N×N board storage.

use crate::error::BoardError;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the classic board.
pub const STANDARD_SIZE: usize = 3;

/// Largest accepted side length.
pub const MAX_SIZE: usize = 256;

/// A square on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol in this square, if any.
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// N×N board with squares in row-major order (`index = row * size + col`).
///
/// The board keeps a running count of filled squares; a square never
/// changes once filled until the board is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
    filled: usize,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        let cells = size
            .checked_mul(size)
            .filter(|_| size <= MAX_SIZE)
            .ok_or(BoardError::TooLarge { size, max: MAX_SIZE })?;
        Ok(Self::empty(size, cells))
    }

    fn empty(size: usize, cells: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; cells],
            filled: 0,
        }
    }

    /// Clears every square.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
        self.filled = 0;
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of squares (`size²`).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Gets the square at `index`.
    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Gets the symbol at `index`, `None` when empty or out of range.
    pub fn symbol_at(&self, index: usize) -> Option<&Symbol> {
        self.get(index).and_then(Square::symbol)
    }

    /// Writes `symbol` into an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for an index past the end and
    /// [`BoardError::AlreadyOccupied`] when the square is taken.
    #[instrument(skip(self))]
    pub fn set(&mut self, index: usize, symbol: Symbol) -> Result<(), BoardError> {
        let len = self.cell_count();
        let square = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::OutOfRange { index, len })?;
        if *square != Square::Empty {
            return Err(BoardError::AlreadyOccupied(index));
        }
        *square = Square::Occupied(symbol);
        self.filled += 1;
        Ok(())
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.filled == self.cell_count()
    }

    /// Indexes of all empty squares, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so a reader can pick one.
    pub fn display(&self) -> String {
        let width = self
            .squares
            .iter()
            .filter_map(Square::symbol)
            .map(Symbol::width)
            .max()
            .unwrap_or(1)
            .max(self.cell_count().to_string().len());

        let separator = vec!["-".repeat(width); self.size].join("+");
        let mut result = String::new();
        for row in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|col| {
                    let index = row * self.size + col;
                    let label = match &self.squares[index] {
                        Square::Empty => (index + 1).to_string(),
                        Square::Occupied(symbol) => symbol.to_string(),
                    };
                    format!("{label:^width$}")
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row + 1 < self.size {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(STANDARD_SIZE, STANDARD_SIZE * STANDARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Symbol {
        Symbol::new("X").unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.cell_count(), 9);
        assert_eq!(board.filled(), 0);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::ZeroSize));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert_eq!(
            Board::new(1usize << 32),
            Err(BoardError::TooLarge {
                size: 1 << 32,
                max: MAX_SIZE
            })
        );
        assert!(matches!(
            Board::new(usize::MAX),
            Err(BoardError::TooLarge { .. })
        ));
        assert!(matches!(
            Board::new(MAX_SIZE + 1),
            Err(BoardError::TooLarge { .. })
        ));
        assert_eq!(Board::new(MAX_SIZE).unwrap().cell_count(), MAX_SIZE * MAX_SIZE);
    }

    #[test]
    fn test_set_increments_filled() {
        let mut board = Board::default();
        board.set(4, x()).unwrap();
        assert_eq!(board.filled(), 1);
        assert_eq!(board.symbol_at(4), Some(&x()));
        assert!(!board.is_empty(4));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut board = Board::default();
        assert_eq!(
            board.set(9, x()),
            Err(BoardError::OutOfRange { index: 9, len: 9 })
        );
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_set_occupied_keeps_original() {
        let mut board = Board::default();
        board.set(0, x()).unwrap();
        let o = Symbol::new("O").unwrap();
        assert_eq!(board.set(0, o), Err(BoardError::AlreadyOccupied(0)));
        assert_eq!(board.symbol_at(0), Some(&x()));
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::default();
        board.set(0, x()).unwrap();
        board.set(8, Symbol::new("O").unwrap()).unwrap();
        board.reset();
        assert_eq!(board.filled(), 0);
        assert_eq!(board.empty_indices(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2).unwrap();
        for index in 0..4 {
            board.set(index, x()).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_indices().is_empty());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let mut board = Board::default();
        board.set(0, x()).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_display_pads_wide_boards() {
        let board = Board::new(4).unwrap();
        let first_line = board.display().lines().next().unwrap().to_string();
        assert_eq!(first_line, "1 |2 |3 |4 ");
    }
}
