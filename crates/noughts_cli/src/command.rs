//! Parsing of terminal input lines into commands.

use std::str::FromStr;

/// A line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the square at this 0-based index.
    Play(usize),
    /// Start a new game, keeping scores.
    Restart,
    /// Exchange the player's and computer's symbols.
    Swap,
    /// Assign explicit symbols (player, computer).
    Symbols(String, String),
    /// Show the scoreboard.
    Scores,
    /// Dump the game state as JSON.
    State,
    /// List commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Why an input line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCommandError {
    /// Blank line.
    #[display("Enter a square number or a command (try `help`)")]
    Empty,

    /// Squares are numbered from 1.
    #[display("Squares are numbered from 1")]
    ZeroCell,

    /// `symbols` needs two tokens.
    #[display("Usage: symbols <player> <computer>")]
    MissingSymbols,

    /// Anything else.
    #[display("Unknown command `{}` (try `help`)", _0)]
    Unknown(String),
}

impl std::error::Error for ParseCommandError {}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        if let Ok(number) = first.parse::<usize>() {
            return number
                .checked_sub(1)
                .map(Command::Play)
                .ok_or(ParseCommandError::ZeroCell);
        }

        match first.to_lowercase().as_str() {
            "restart" | "r" | "new" => Ok(Command::Restart),
            "swap" => Ok(Command::Swap),
            "symbols" => match (words.next(), words.next()) {
                (Some(player), Some(computer)) => {
                    Ok(Command::Symbols(player.to_string(), computer.to_string()))
                }
                _ => Err(ParseCommandError::MissingSymbols),
            },
            "scores" | "score" => Ok(Command::Scores),
            "state" => Ok(Command::State),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(ParseCommandError::Unknown(first.to_string())),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  <n>                  play square n (numbered from 1, row by row)
  restart              start a new game (scores are kept)
  swap                 exchange symbols between games
  symbols <p> <c>      set player and computer symbols between games
  scores               show the scoreboard
  state                print the game state as JSON
  help                 show this list
  quit                 leave";
