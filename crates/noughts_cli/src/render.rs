//! Board rendering and end-of-game cues.

use noughts::{Board, MoveOutcome, Outcome, Side, Square, Symbol, Symbols};

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Sound-alike signal for how a game ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Cue {
    /// The player completed a line.
    Win,
    /// The computer completed a line.
    Loss,
    /// The board filled up.
    Tie,
}

impl Cue {
    /// Picks the cue for a move result; `None` while the game continues.
    pub fn for_outcome(outcome: &MoveOutcome, symbols: &Symbols) -> Option<Self> {
        if let Some(line) = outcome.won() {
            return symbols.side_of(line.symbol()).map(|side| match side {
                Side::Player => Cue::Win,
                Side::Computer => Cue::Loss,
            });
        }
        outcome.tie().then_some(Cue::Tie)
    }

    /// Banner shown for the cue.
    pub fn banner(self) -> &'static str {
        match self {
            Cue::Win => "*** You win! ***",
            Cue::Loss => "*** The computer wins. ***",
            Cue::Tie => "*** It's a tie. ***",
        }
    }
}

/// Renders the board; a finished game dims squares off the winning line,
/// or every square after a tie.
///
/// With `ansi` the dimmed squares use the terminal's faint style, otherwise
/// they are bracketed and lowercased.
pub fn render_board(board: &Board, outcome: &Outcome, ansi: bool) -> String {
    let dimmed = |index: usize| match outcome {
        Outcome::Won(line) => !line.contains(index),
        Outcome::Tie => true,
        Outcome::InProgress => false,
    };
    if !outcome.is_over() {
        return board.display();
    }

    let size = board.size();
    let symbol_width = board
        .squares()
        .iter()
        .filter_map(Square::symbol)
        .map(|symbol| symbol.width())
        .max()
        .unwrap_or(1);
    let width = if ansi { symbol_width } else { symbol_width + 2 };
    let separator = vec!["-".repeat(width); size].join("+");

    let rows: Vec<String> = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let index = row * size + col;
                    match board.symbol_at(index).map(Symbol::as_str) {
                        None => " ".repeat(width),
                        Some(label) if !dimmed(index) => format!("{label:^width$}"),
                        Some(label) if ansi => format!("{DIM}{label:^width$}{RESET}"),
                        Some(label) => {
                            let marker = format!("[{}]", label.to_lowercase());
                            format!("{marker:^width$}")
                        }
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(format!("\n{separator}\n").as_str())
}

/// One-line scoreboard.
pub fn render_scores(symbols: &Symbols, player: u32, computer: u32) -> String {
    format!(
        "You ({}) {} - {} Computer ({})",
        symbols.player(),
        player,
        computer,
        symbols.computer()
    )
}
