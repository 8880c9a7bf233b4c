//! Interactive game session: reads commands, drives the engine, renders.

use crate::command::{Command, HELP};
use crate::render::{Cue, render_board, render_scores};
use anyhow::{Context, Result};
use noughts::{GameEngine, GameState, MoveError, MoveOutcome, Scores, Symbols};
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Everything a `state` command prints.
#[derive(Serialize)]
struct Snapshot<'a> {
    game: &'a GameState,
    symbols: &'a Symbols,
    scores: Scores,
}

/// Terminal front end for one engine.
///
/// The app owns the sequencing the engine leaves to its caller: after
/// every accepted player move that does not end the game it asks for the
/// computer's reply.
pub struct App<R = StdRng> {
    engine: GameEngine<R>,
    computer_first: bool,
    ansi: bool,
}

impl<R: Rng> App<R> {
    /// Creates an app around `engine`.
    pub fn new(engine: GameEngine<R>, computer_first: bool, ansi: bool) -> Self {
        Self {
            engine,
            computer_first,
            ansi,
        }
    }

    /// Returns the engine.
    #[cfg(test)]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut out: O) -> Result<()> {
        self.open_game(&mut out)?;
        self.prompt(&mut out)?;

        for line in input.lines() {
            let line = line.context("reading input")?;
            let flow = match line.parse::<Command>() {
                Ok(command) => self.handle(command, &mut out)?,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            self.prompt(&mut out)?;
        }

        let scores = self.engine.scores();
        writeln!(
            out,
            "Final score: {}",
            render_scores(self.engine.symbols(), *scores.player(), *scores.computer())
        )?;
        info!(?scores, "Session ended");
        Ok(())
    }

    fn handle<O: Write>(&mut self, command: Command, out: &mut O) -> Result<Flow> {
        debug!(?command, "Handling command");
        match command {
            Command::Play(index) => self.player_turn(index, out)?,
            Command::Restart => {
                self.engine.restart();
                self.open_game(out)?;
            }
            Command::Swap => {
                let swapped = self.engine.symbols().swapped();
                self.change_symbols(swapped.player().as_str(), swapped.computer().as_str(), out)?;
            }
            Command::Symbols(player, computer) => self.change_symbols(&player, &computer, out)?,
            Command::Scores => {
                let scores = self.engine.scores();
                writeln!(
                    out,
                    "{}",
                    render_scores(self.engine.symbols(), *scores.player(), *scores.computer())
                )?;
            }
            Command::State => {
                let snapshot = Snapshot {
                    game: self.engine.state(),
                    symbols: self.engine.symbols(),
                    scores: self.engine.scores(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Shows a fresh board, letting the computer open when configured.
    fn open_game<O: Write>(&mut self, out: &mut O) -> Result<()> {
        if self.computer_first {
            match self.engine.computer_move() {
                Ok(result) => self.announce_computer(&result, out)?,
                Err(e) => warn!(error = %e, "Computer could not open"),
            }
        }
        self.show_board(out)
    }

    fn player_turn<O: Write>(&mut self, index: usize, out: &mut O) -> Result<()> {
        let result = match self.engine.attempt_player_move(index) {
            Ok(result) => result,
            Err(e) => return self.report_rejection(&e, out),
        };

        if !*result.completed() {
            match self.engine.computer_move() {
                Ok(reply) => {
                    self.announce_computer(&reply, out)?;
                    self.show_board(out)?;
                    return self.announce_end(&reply, out);
                }
                Err(e) => warn!(error = %e, "Computer reply rejected"),
            }
        }

        self.show_board(out)?;
        self.announce_end(&result, out)
    }

    fn change_symbols<O: Write>(&mut self, player: &str, computer: &str, out: &mut O) -> Result<()> {
        match self.engine.set_symbols(player, computer) {
            Ok(()) => writeln!(
                out,
                "You now play {}, the computer plays {}.",
                self.engine.symbols().player(),
                self.engine.symbols().computer()
            )?,
            Err(e) => writeln!(out, "{e}. Finish or restart the game first.")?,
        }
        Ok(())
    }

    fn report_rejection<O: Write>(&self, error: &MoveError, out: &mut O) -> Result<()> {
        debug!(%error, "Ignoring rejected move");
        match error {
            MoveError::GameOver => writeln!(out, "The game is over. Type `restart` to play again.")?,
            MoveError::SlotOccupied(_) => writeln!(out, "That square is taken.")?,
            MoveError::OutOfRange { len, .. } => {
                writeln!(out, "Pick a square from 1 to {len}.")?
            }
            other => writeln!(out, "{other}")?,
        }
        Ok(())
    }

    fn announce_computer<O: Write>(&self, result: &MoveOutcome, out: &mut O) -> Result<()> {
        if let Some(index) = result.index() {
            writeln!(
                out,
                "Computer plays {} on {}.",
                self.engine.symbols().computer(),
                index + 1
            )?;
        }
        Ok(())
    }

    fn announce_end<O: Write>(&self, result: &MoveOutcome, out: &mut O) -> Result<()> {
        if let Some(cue) = Cue::for_outcome(result, self.engine.symbols()) {
            info!(%cue, "Game finished");
            writeln!(out, "{}", cue.banner())?;
            let scores = self.engine.scores();
            writeln!(
                out,
                "{}",
                render_scores(self.engine.symbols(), *scores.player(), *scores.computer())
            )?;
        }
        Ok(())
    }

    fn show_board<O: Write>(&self, out: &mut O) -> Result<()> {
        writeln!(
            out,
            "\n{}\n",
            render_board(self.engine.board(), self.engine.outcome(), self.ansi)
        )?;
        Ok(())
    }

    fn prompt<O: Write>(&self, out: &mut O) -> Result<()> {
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::{Outcome, Side};
    use rand::SeedableRng;
    use std::io::Cursor;

    fn app(seed: u64, computer_first: bool) -> App<StdRng> {
        let engine =
            GameEngine::with_rng(3, Symbols::default(), StdRng::seed_from_u64(seed)).unwrap();
        App::new(engine, computer_first, false)
    }

    fn run(app: &mut App<StdRng>, script: &str) -> String {
        let mut out = Vec::new();
        app.run(Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_player_move_gets_computer_reply() {
        let mut app = app(1, false);
        let output = run(&mut app, "5\nquit\n");
        assert_eq!(app.engine().board().filled(), 2);
        assert!(output.contains("Computer plays O on"));
        assert_eq!(
            app.engine().state().history()[1].side(),
            Side::Computer
        );
    }

    #[test]
    fn test_taken_square_is_ignored() {
        let mut app = app(2, false);
        let output = run(&mut app, "5\n5\nquit\n");
        assert!(output.contains("That square is taken."));
        assert_eq!(app.engine().board().filled(), 2);
    }

    #[test]
    fn test_out_of_range_square_is_ignored() {
        let mut app = app(3, false);
        let output = run(&mut app, "10\n");
        assert!(output.contains("Pick a square from 1 to 9."));
        assert_eq!(app.engine().board().filled(), 0);
    }

    #[test]
    fn test_computer_first_opens_each_game() {
        let mut app = app(4, true);
        run(&mut app, "restart\n");
        assert_eq!(app.engine().board().filled(), 1);
        assert_eq!(app.engine().state().history()[0].side(), Side::Computer);
    }

    #[test]
    fn test_full_game_reaches_an_end() {
        let mut app = app(5, false);
        // Try every square in order; taken squares are ignored.
        let script = (1..=9).map(|n| format!("{n}\n")).collect::<String>();
        let output = run(&mut app, &script);
        assert!(app.engine().outcome().is_over());
        assert!(
            output.contains("You win!")
                || output.contains("The computer wins.")
                || output.contains("It's a tie.")
        );
        assert!(output.contains("Final score:"));
    }

    #[test]
    fn test_moves_after_game_over_are_refused() {
        let mut app = app(6, false);
        let mut script = (1..=9).map(|n| format!("{n}\n")).collect::<String>();
        script.push_str("1\n");
        let output = run(&mut app, &script);
        assert!(output.contains("The game is over."));
    }

    #[test]
    fn test_swap_rejected_mid_game_then_allowed_after_restart() {
        let mut app = app(7, false);
        let output = run(&mut app, "1\nswap\nrestart\nswap\n");
        assert!(output.contains("Symbols cannot change while a game is in progress"));
        assert!(output.contains("You now play O, the computer plays X."));
        assert_eq!(app.engine().symbols().player().as_str(), "O");
        assert_eq!(app.engine().outcome(), &Outcome::InProgress);
    }

    #[test]
    fn test_state_prints_json() {
        let mut app = app(8, false);
        let output = run(&mut app, "state\n");
        let start = output.find('{').unwrap();
        let end = output.rfind('}').unwrap();
        let json: serde_json::Value = serde_json::from_str(&output[start..=end]).unwrap();
        assert_eq!(json["game"]["outcome"]["status"], "in_progress");
        assert_eq!(json["scores"]["player"], 0);
        assert_eq!(json["symbols"]["player"], "X");
    }

    #[test]
    fn test_unknown_command_reported() {
        let mut app = app(9, false);
        let output = run(&mut app, "dance\n");
        assert!(output.contains("Unknown command `dance`"));
    }
}
