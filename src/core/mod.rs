//! Core engine types: places, sides, board, move history, RNG, configuration.
//!
//! This module holds the state a game mutates. Rules that read that state
//! (threats, outcomes) live in `rules`.

pub mod place;
pub mod board;
pub mod history;
pub mod rng;
pub mod config;

pub use place::{Place, PlaceSet, Side, SideMap, Symbol};
pub use board::Board;
pub use history::MoveRecord;
pub use rng::{Chooser, GameRng, GameRngState};
pub use config::{GameConfig, OccupiedCellPolicy};
