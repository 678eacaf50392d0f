//! Game configuration types.
//!
//! The board topology is fixed; what a game can configure is how it is
//! seeded, who moves first, and what happens when the human picks a cell
//! that is already taken.

use serde::{Deserialize, Serialize};

use super::place::Side;

/// What to do when the human picks a cell that is already occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OccupiedCellPolicy {
    /// The pick is ignored and the turn still proceeds: the outcome is
    /// checked and the computer moves.
    #[default]
    ConsumeTurn,
    /// The pick is rejected and the human is asked again.
    Reprompt,
}

impl std::fmt::Display for OccupiedCellPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupiedCellPolicy::ConsumeTurn => write!(f, "consume-turn"),
            OccupiedCellPolicy::Reprompt => write!(f, "reprompt"),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the computer's tie-breaks. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Handling of picks on occupied cells.
    pub occupied_policy: OccupiedCellPolicy,

    /// Side that moves first.
    pub first_mover: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            occupied_policy: OccupiedCellPolicy::default(),
            first_mover: Side::Player,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the occupied-cell policy.
    #[must_use]
    pub fn with_occupied_policy(mut self, policy: OccupiedCellPolicy) -> Self {
        self.occupied_policy = policy;
        self
    }

    /// Set which side opens the game.
    #[must_use]
    pub fn with_first_mover(mut self, side: Side) -> Self {
        self.first_mover = side;
        self
    }
}
