//! Game outcomes and per-move results reported to the front end.

use crate::action::Move;
use crate::symbol::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A completed line of identical symbols.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct WinningLine {
    /// Symbol filling the line.
    symbol: Symbol,
    /// Square indexes forming the line, ascending.
    indexes: Vec<usize>,
}

impl WinningLine {
    /// Checks if `index` belongs to the line.
    pub fn contains(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    /// Indexes of a `cell_count` board that are not part of the line.
    ///
    /// Front ends dim these squares when a game is won.
    pub fn dimmed_indexes(&self, cell_count: usize) -> Vec<usize> {
        (0..cell_count).filter(|index| !self.contains(*index)).collect()
    }
}

/// Result of scanning a board after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// No line and free squares remain.
    Open,
    /// A line of identical symbols exists.
    Win(WinningLine),
    /// Every square is filled without a line.
    Tie,
}

/// Current status of the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(WinningLine),
    /// Game ended with a full board and no line.
    Tie,
}

impl Outcome {
    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Won(line) => Some(line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(line) => write!(f, "{} wins on {:?}", line.symbol(), line.indexes()),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// What a single accepted move did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied; `None` when the engine only settled a
    /// full board as a tie.
    placed: Option<Move>,
    /// True when this move ended the game.
    completed: bool,
    /// Winning line created by the move.
    won: Option<WinningLine>,
    /// True when the move filled the board without a line.
    tie: bool,
}

impl MoveOutcome {
    pub(crate) fn from_evaluation(placed: Move, evaluation: &Evaluation) -> Self {
        match evaluation {
            Evaluation::Open => Self {
                placed: Some(placed),
                completed: false,
                won: None,
                tie: false,
            },
            Evaluation::Win(line) => Self {
                placed: Some(placed),
                completed: true,
                won: Some(line.clone()),
                tie: false,
            },
            Evaluation::Tie => Self {
                placed: Some(placed),
                completed: true,
                won: None,
                tie: true,
            },
        }
    }

    pub(crate) fn settled_tie() -> Self {
        Self {
            placed: None,
            completed: true,
            won: None,
            tie: true,
        }
    }

    /// Index written by this move, if any.
    pub fn index(&self) -> Option<usize> {
        self.placed.as_ref().map(Move::index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimmed_indexes_exclude_line() {
        let line = WinningLine::new(Symbol::new("X").unwrap(), vec![0, 4, 8]);
        assert_eq!(line.dimmed_indexes(9), vec![1, 2, 3, 5, 6, 7]);
        assert!(line.contains(4));
        assert!(!line.contains(5));
    }

    #[test]
    fn test_outcome_is_over() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Tie.is_over());
        let won = Outcome::Won(WinningLine::new(Symbol::new("O").unwrap(), vec![2, 4, 6]));
        assert!(won.is_over());
        assert_eq!(won.winning_line().map(|l| l.indexes().clone()), Some(vec![2, 4, 6]));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(Outcome::Tie).unwrap();
        assert_eq!(json["status"], "tie");
    }
}
