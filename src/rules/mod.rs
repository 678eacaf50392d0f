//! Game rules over a `Board`.
//!
//! - `lines`: the winning-line table and threat detection
//! - `outcome`: win/tie detection and terminal results
//!
//! Both are pure functions of the board; nothing here mutates state.

pub mod lines;
pub mod outcome;

pub use lines::{compute_threats, Threats, WINNING_LINES};
pub use outcome::{check_outcome, GameResult, Outcome};
