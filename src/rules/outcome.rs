//! Outcome evaluation.

use serde::{Deserialize, Serialize};

use super::lines::line_sets;
use crate::core::{Board, Side};

/// State of the board after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    PlayerWins,
    ComputerWins,
    Tied,
}

impl Outcome {
    /// Win for the given side.
    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWins,
            Side::Computer => Outcome::ComputerWins,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The terminal result, or `None` while the game continues.
    #[must_use]
    pub const fn terminal(self) -> Option<GameResult> {
        match self {
            Outcome::InProgress => None,
            Outcome::PlayerWins => Some(GameResult::PlayerWins),
            Outcome::ComputerWins => Some(GameResult::ComputerWins),
            Outcome::Tied => Some(GameResult::Tied),
        }
    }
}

/// How a started game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    PlayerWins,
    ComputerWins,
    Tied,
    /// The human quit mid-game.
    Abandoned,
}

impl GameResult {
    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::PlayerWins => Some(Side::Player),
            GameResult::ComputerWins => Some(Side::Computer),
            GameResult::Tied | GameResult::Abandoned => None,
        }
    }

    /// Text shown to the human when the game ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            GameResult::PlayerWins => "Winner -- player",
            GameResult::ComputerWins => "Winner -- computer",
            GameResult::Tied => "Match tied",
            GameResult::Abandoned => "Match abandoned",
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate the board.
///
/// Lines are scanned in table order, the human's triple checked before the
/// computer's on each line. A completed line wins even on a full board.
#[must_use]
pub fn check_outcome(board: &Board) -> Outcome {
    for line in line_sets() {
        for side in Side::BOTH {
            if line.difference(board.marks(side)).is_empty() {
                return Outcome::win_for(side);
            }
        }
    }

    if board.is_full() {
        Outcome::Tied
    } else {
        Outcome::InProgress
    }
}
