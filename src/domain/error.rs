//! Error types for automaton construction.

use thiserror::Error;

/// Errors raised when an automaton cannot be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// A dimension was below zero
    #[error("negative grid dimension: {rows}x{cols}")]
    NegativeDimension { rows: i64, cols: i64 },

    /// rows * cols does not fit in memory indexing
    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: i64, cols: i64 },
}

/// Result type alias for automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;
