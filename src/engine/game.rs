//! The game engine.

use tracing::{debug, warn};

use super::strategy::{choose_next_placement, Placement};
use crate::core::{Board, Chooser, GameConfig, Place, Side, Symbol};
use crate::error::{Error, Result};
use crate::rules::{check_outcome, compute_threats, Outcome, Threats};

/// Result of a human move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveApplied {
    /// The cell was blank and now holds the human's symbol.
    Placed(Place),
    /// The cell was already taken; the board is unchanged.
    Ignored(Place),
}

/// Owns one game's board and evaluates it.
///
/// Construct a fresh engine per game; nothing is shared between games.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    /// Last computed threats. Stale after any move until recomputed.
    threats: Threats,
}

impl GameEngine {
    /// Start a game with the human playing `player_symbol`.
    #[must_use]
    pub fn new(player_symbol: Symbol, config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(player_symbol),
            threats: Threats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player_symbol(&self) -> Symbol {
        self.board.symbol_of(Side::Player)
    }

    #[must_use]
    pub fn computer_symbol(&self) -> Symbol {
        self.board.symbol_of(Side::Computer)
    }

    /// Symbol at a raw place identifier.
    pub fn symbol_at(&self, place: i64) -> Result<Option<Symbol>> {
        Ok(self.board.symbol_at(Place::new(place)?))
    }

    /// Mark a blank cell; the owning side is derived from `symbol`.
    pub fn set_symbol(&mut self, place: Place, symbol: Symbol) -> Result<Side> {
        let side = self.board.set_symbol(place, symbol)?;
        debug!(%place, %symbol, %side, "cell marked");
        Ok(side)
    }

    /// Recompute both sides' threats from the current board.
    pub fn compute_threats(&mut self) -> &Threats {
        self.threats = compute_threats(&self.board);
        &self.threats
    }

    /// The threats from the last `compute_threats` call.
    #[must_use]
    pub fn threats(&self) -> &Threats {
        &self.threats
    }

    /// Apply the human's pick.
    ///
    /// The place is range-checked again here. An occupied cell is not an
    /// error: the board is left unchanged and `MoveApplied::Ignored` is
    /// returned.
    pub fn apply_player_move(&mut self, place: i64) -> Result<MoveApplied> {
        let place = Place::new(place)?;
        self.ensure_in_progress()?;

        if !self.board.is_blank(place) {
            warn!(%place, "player picked an occupied cell, move ignored");
            return Ok(MoveApplied::Ignored(place));
        }

        self.set_symbol(place, self.player_symbol())?;
        Ok(MoveApplied::Placed(place))
    }

    /// Pick the computer's next cell from the last computed threats.
    pub fn choose_next_placement<C>(&self, chooser: &mut C) -> Result<Placement>
    where
        C: Chooser + ?Sized,
    {
        choose_next_placement(&self.board, &self.threats, chooser)
    }

    /// Recompute threats, pick the computer's cell, and mark it.
    pub fn apply_computer_move<C>(&mut self, chooser: &mut C) -> Result<Placement>
    where
        C: Chooser + ?Sized,
    {
        self.ensure_in_progress()?;
        self.compute_threats();

        let placement = self.choose_next_placement(chooser)?;
        debug!(place = %placement.place, reason = %placement.reason, "computer placement chosen");

        self.set_symbol(placement.place, self.computer_symbol())?;
        Ok(placement)
    }

    /// Evaluate the current board.
    #[must_use]
    pub fn check_outcome(&self) -> Outcome {
        check_outcome(&self.board)
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.check_outcome().is_terminal() {
            Err(Error::GameOver)
        } else {
            Ok(())
        }
    }
}
