//! # rust-ttt
//!
//! Human-vs-computer tic-tac-toe on a 3x3 grid.
//!
//! ## Design Principles
//!
//! 1. **Engine first**: board state, threat detection, outcome checks and
//!    the computer's heuristic have no I/O dependency.
//!
//! 2. **One engine per game**: all state lives in a `GameEngine` value,
//!    built fresh for each game.
//!
//! 3. **Injectable randomness**: the computer breaks ties through the
//!    `Chooser` trait, so every decision can be seeded or scripted.
//!
//! ## Computer Heuristic
//!
//! Win if it can, else block, else play any blank cell. No search.
//!
//! ## Modules
//!
//! - `core`: places, symbols, sides, board, move history, RNG, configuration
//! - `rules`: winning lines, threat sets, outcome evaluation
//! - `engine`: `GameEngine` and computer move selection
//! - `session`: console collaborator trait, terminal console, game driver

pub mod core;
pub mod error;
pub mod rules;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Chooser, GameConfig, GameRng, GameRngState, MoveRecord, OccupiedCellPolicy, Place,
    PlaceSet, Side, SideMap, Symbol,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{check_outcome, compute_threats, GameResult, Outcome, Threats, WINNING_LINES};

pub use crate::engine::{GameEngine, MoveApplied, Placement, PlacementReason};

pub use crate::session::{
    Console, PlacementInput, Session, SessionEnd, SessionPhase, SymbolChoice, TerminalConsole,
};
