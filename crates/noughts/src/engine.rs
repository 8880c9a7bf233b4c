//! Game engine: turn enforcement, move pipeline, scoring.

use crate::action::Move;
use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::contracts::{Contract, MoveContract};
use crate::error::{BoardError, MoveError, SymbolError};
use crate::outcome::{Evaluation, MoveOutcome, Outcome};
use crate::rules;
use crate::state::GameState;
use crate::symbol::{Scores, Side, Symbols};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// Three-in-a-row engine for one human against the computer.
///
/// The engine owns the board and is driven by a front end: it accepts a
/// player move, and the front end then asks for the computer's reply.
/// Every rejected request leaves the engine untouched.
///
/// The random source only decides which empty square the computer takes;
/// inject a seeded `R` to make games reproducible.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    state: GameState,
    symbols: Symbols,
    scores: Scores,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Builds an engine from configuration, seeding from `seed` when set.
    #[instrument(skip(config), fields(size = config.size(), seed = ?config.seed()))]
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let board = config.board()?;
        let symbols = config.symbols()?;
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        info!(size = board.size(), player = %symbols.player(), computer = %symbols.computer(), "Engine configured");
        Ok(Self::assemble(board, symbols, rng))
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::assemble(Board::default(), Symbols::default(), StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine on a `size`×`size` board with an injected random source.
    #[instrument(skip(rng))]
    pub fn with_rng(size: usize, symbols: Symbols, rng: R) -> Result<Self, BoardError> {
        Ok(Self::assemble(Board::new(size)?, symbols, rng))
    }

    fn assemble(board: Board, symbols: Symbols, rng: R) -> Self {
        Self {
            state: GameState::new(board),
            symbols,
            scores: Scores::default(),
            rng,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> &Outcome {
        self.state.outcome()
    }

    /// Returns the symbol assignment.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Returns the win counters.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Starts a new game on an empty board; scores are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state.reset();
        info!(scores = ?self.scores, "Game restarted");
    }

    /// Replaces the symbols used by both sides.
    ///
    /// Allowed before the first move of a game or once it has finished.
    ///
    /// # Errors
    ///
    /// [`SymbolError::Empty`] or [`SymbolError::Identical`] for bad tokens,
    /// [`SymbolError::GameInProgress`] while a game is under way.
    #[instrument(skip(self, player, computer))]
    pub fn set_symbols(
        &mut self,
        player: impl AsRef<str>,
        computer: impl AsRef<str>,
    ) -> Result<(), SymbolError> {
        let symbols = Symbols::parse(player, computer)?;
        if !self.state.history().is_empty() && !self.state.outcome().is_over() {
            warn!("Rejected symbol change mid-game");
            return Err(SymbolError::GameInProgress);
        }
        info!(player = %symbols.player(), computer = %symbols.computer(), "Symbols changed");
        self.symbols = symbols;
        Ok(())
    }

    /// Places the player's symbol at `index`.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::GameOver`], [`MoveError::OutOfRange`],
    /// [`MoveError::SlotOccupied`], [`MoveError::OutOfTurn`].
    #[instrument(skip(self))]
    pub fn attempt_player_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        self.place(Side::Player, index)
    }

    /// Places `side`'s symbol at `index` through the regular move pipeline.
    ///
    /// Lets scripted play and replays choose the computer's squares.
    #[instrument(skip(self))]
    pub fn place(&mut self, side: Side, index: usize) -> Result<MoveOutcome, MoveError> {
        self.play(side, index)
    }

    /// Restarts and replays `moves` in order, stopping at the first error.
    ///
    /// Returns the result of the last move, or `None` for an empty script.
    /// Scores from any game finished by the replay are counted.
    #[instrument(skip(self))]
    pub fn replay(&mut self, moves: &[(Side, usize)]) -> Result<Option<MoveOutcome>, MoveError> {
        self.restart();
        let mut last = None;
        for &(side, index) in moves {
            last = Some(self.play(side, index)?);
        }
        Ok(last)
    }

    /// Places the computer's symbol on a uniformly random empty square.
    ///
    /// A full board that was somehow not settled is settled as a tie.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is finished, and
    /// [`MoveError::OutOfTurn`] if the computer moved last.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<MoveOutcome, MoveError> {
        if self.state.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        let open = self.state.board().empty_indices();
        if open.is_empty() {
            warn!("No empty squares left on an unsettled board; settling as tie");
            self.state.set_outcome(Outcome::Tie);
            return Ok(MoveOutcome::settled_tie());
        }

        // The turn check must run before the draw so a rejected call
        // leaves the random source untouched.
        let turn_check = Move::new(Side::Computer, self.symbols.computer().clone(), open[0]);
        MoveContract::pre(&self.state, &turn_check)?;

        let index = open[self.rng.random_range(0..open.len())];
        debug!(index, choices = open.len(), "Computer picked square");
        self.play(Side::Computer, index)
    }

    /// Shared pipeline: contract check, write, evaluate, score.
    fn play(&mut self, side: Side, index: usize) -> Result<MoveOutcome, MoveError> {
        let action = Move::new(side, self.symbols.of(side).clone(), index);

        if let Err(e) = MoveContract::pre(&self.state, &action) {
            warn!(%action, error = %e, "Move rejected");
            return Err(e);
        }

        let before = self.state.clone();
        self.state.apply_move(action.clone())?;

        // Postconditions only run in debug builds.
        if cfg!(debug_assertions)
            && let Err(e) = MoveContract::post(&before, &self.state)
        {
            self.state = before;
            return Err(e);
        }

        let evaluation = rules::evaluate(self.state.board());
        match &evaluation {
            Evaluation::Open => {
                debug!(%action, "Move applied");
            }
            Evaluation::Win(line) => {
                if let Some(winner) = self.symbols.side_of(line.symbol()) {
                    self.scores.record_win(winner);
                }
                info!(%action, indexes = ?line.indexes(), scores = ?self.scores, "Game won");
                self.state.set_outcome(Outcome::Won(line.clone()));
            }
            Evaluation::Tie => {
                info!(%action, "Game tied");
                self.state.set_outcome(Outcome::Tie);
            }
        }

        Ok(MoveOutcome::from_evaluation(action, &evaluation))
    }
}
