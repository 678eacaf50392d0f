//! The game engine and the computer's move heuristic.
//!
//! `GameEngine` owns one game's `Board` and exposes move application, threat
//! evaluation, computer move selection and outcome checks. The heuristic in
//! `strategy` is a free function over a board and its threats so it can be
//! exercised without an engine.

mod game;
pub mod strategy;

pub use game::{GameEngine, MoveApplied};
pub use strategy::{choose_next_placement, Placement, PlacementReason};
