//! The I/O collaborator the session talks to.
//!
//! The session never reads a keyboard or writes a terminal directly; it asks
//! a `Console` for the human's choices and hands it boards and results to
//! show. `TerminalConsole` is the interactive implementation; tests script
//! their own.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Place, Symbol};
use crate::error::Result;
use crate::rules::GameResult;

/// Answer to the symbol prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolChoice {
    Pick(Symbol),
    Quit,
}

/// Answer to the placement prompt.
///
/// Implementations should only return integers in 1-9; the engine checks
/// the range again and the session re-prompts on anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementInput {
    Place(i64),
    Quit,
}

/// Interactive collaborator for one game session.
///
/// Prompts block until the human answers.
pub trait Console {
    /// Ask the human for a symbol, or a quit.
    fn prompt_symbol(&mut self) -> Result<SymbolChoice>;

    /// Ask the human for a place, or a quit.
    fn prompt_placement(&mut self) -> Result<PlacementInput>;

    /// Show the board. Must not retain or mutate engine state.
    fn render(&mut self, board: &Board, player_symbol: Symbol, computer_symbol: Symbol) -> Result<()>;

    /// Show the final result.
    fn report_outcome(&mut self, result: GameResult) -> Result<()>;

    /// Tell the human a pick was rejected because the cell is taken.
    ///
    /// Only called under `OccupiedCellPolicy::Reprompt`.
    fn notify_occupied(&mut self, _place: Place) -> Result<()> {
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn prompt_symbol(&mut self) -> Result<SymbolChoice> {
        (**self).prompt_symbol()
    }

    fn prompt_placement(&mut self) -> Result<PlacementInput> {
        (**self).prompt_placement()
    }

    fn render(&mut self, board: &Board, player_symbol: Symbol, computer_symbol: Symbol) -> Result<()> {
        (**self).render(board, player_symbol, computer_symbol)
    }

    fn report_outcome(&mut self, result: GameResult) -> Result<()> {
        (**self).report_outcome(result)
    }

    fn notify_occupied(&mut self, place: Place) -> Result<()> {
        (**self).notify_occupied(place)
    }
}
