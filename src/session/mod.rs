//! Interactive play: the console collaborator and the game driver.

pub mod console;
pub mod driver;
pub mod terminal;

pub use console::{Console, PlacementInput, SymbolChoice};
pub use driver::{Session, SessionEnd, SessionPhase};
pub use terminal::TerminalConsole;
