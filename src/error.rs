//! Error types for the engine and the console collaborator.

use thiserror::Error;

/// Errors surfaced by the engine and the interactive session.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("place {place} is out of bounds (must be 1-9)")]
    InvalidPlace { place: i64 },

    #[error("place {place} is already occupied")]
    CellOccupied { place: u8 },

    #[error("no blank cells left to choose from")]
    NoCandidateMoves,

    #[error("game already over")]
    GameOver,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the operation that was being attempted.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::io("IO operation", source)
    }
}
