//! Game session driver.
//!
//! Runs one game from symbol choice to a terminal result:
//!
//! ```text
//! AwaitingSymbolChoice --quit--> Aborted
//!         | pick
//!         v
//!     InProgress --quit--> Terminal(Abandoned)
//!         | win / tie
//!         v
//!     Terminal(PlayerWins | ComputerWins | Tied)
//! ```
//!
//! Each round: render, prompt, apply the human move, check the outcome, then
//! (if still in progress) let the computer move and check again.

use tracing::{debug, info, warn};

use super::console::{Console, PlacementInput, SymbolChoice};
use crate::core::{Board, Chooser, GameConfig, OccupiedCellPolicy, Side};
use crate::engine::{GameEngine, MoveApplied};
use crate::error::{Error, Result};
use crate::rules::GameResult;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingSymbolChoice,
    InProgress,
    Terminal(GameResult),
    /// The human quit before choosing a symbol.
    Aborted,
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Quit at the symbol prompt; no game was played.
    Aborted,
    /// A game was started and reached a terminal result.
    Finished { result: GameResult, board: Board },
}

impl SessionEnd {
    /// The game's result, if a game was played.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            SessionEnd::Aborted => None,
            SessionEnd::Finished { result, .. } => Some(*result),
        }
    }
}

/// Drives one game between a console and the engine.
pub struct Session<C, R> {
    console: C,
    chooser: R,
    config: GameConfig,
    phase: SessionPhase,
}

impl<C: Console, R: Chooser> Session<C, R> {
    /// Create a session. `chooser` breaks the computer's ties.
    pub fn new(console: C, chooser: R, config: GameConfig) -> Self {
        Self {
            console,
            chooser,
            config,
            phase: SessionPhase::AwaitingSymbolChoice,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consume the session, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Play one game to the end.
    ///
    /// Once terminal, the board is rendered a final time and the result
    /// reported. A quit at the symbol prompt skips both.
    pub fn play(&mut self) -> Result<SessionEnd> {
        if self.phase != SessionPhase::AwaitingSymbolChoice {
            return Err(Error::GameOver);
        }

        let player_symbol = match self.console.prompt_symbol()? {
            SymbolChoice::Pick(symbol) => symbol,
            SymbolChoice::Quit => {
                info!("quit before choosing a symbol");
                self.phase = SessionPhase::Aborted;
                return Ok(SessionEnd::Aborted);
            }
        };

        let mut engine = GameEngine::new(player_symbol, self.config.clone());
        info!(
            player = %engine.player_symbol(),
            computer = %engine.computer_symbol(),
            first = %self.config.first_mover,
            policy = %self.config.occupied_policy,
            "game started"
        );
        self.phase = SessionPhase::InProgress;

        let result = self.run(&mut engine)?;
        self.phase = SessionPhase::Terminal(result);

        self.render(&engine)?;
        self.console.report_outcome(result)?;
        info!(%result, moves = engine.board().move_count(), "game over");
        for record in engine.board().history() {
            debug!(%record, "history");
        }

        Ok(SessionEnd::Finished {
            result,
            board: engine.board().clone(),
        })
    }

    fn run(&mut self, engine: &mut GameEngine) -> Result<GameResult> {
        if self.config.first_mover == Side::Computer {
            engine.apply_computer_move(&mut self.chooser)?;
        }

        loop {
            self.render(engine)?;

            let place = match self.console.prompt_placement()? {
                PlacementInput::Place(place) => place,
                PlacementInput::Quit => return Ok(GameResult::Abandoned),
            };

            match engine.apply_player_move(place) {
                Ok(MoveApplied::Placed(_)) => {}
                Ok(MoveApplied::Ignored(place)) => {
                    if self.config.occupied_policy == OccupiedCellPolicy::Reprompt {
                        self.console.notify_occupied(place)?;
                        continue;
                    }
                }
                Err(Error::InvalidPlace { place }) => {
                    warn!(place, "console returned an out-of-range place, asking again");
                    continue;
                }
                Err(e) => return Err(e),
            }

            if let Some(result) = engine.check_outcome().terminal() {
                return Ok(result);
            }

            engine.apply_computer_move(&mut self.chooser)?;

            if let Some(result) = engine.check_outcome().terminal() {
                return Ok(result);
            }
        }
    }

    fn render(&mut self, engine: &GameEngine) -> Result<()> {
        self.console
            .render(engine.board(), engine.player_symbol(), engine.computer_symbol())
    }
}
