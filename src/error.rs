//! Error types for the npuzzle crate

use thiserror::Error;

use crate::board::Direction;

/// Main error type for the npuzzle crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board dimension {n} is out of range (must be between 2 and 255)")]
    InvalidDimension { n: usize },

    #[error("flat board has wrong length: expected {expected} tiles, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("tiles are not a permutation of 0..{}", n * n)]
    InvalidBoardTiles { n: usize },

    #[error("row {row} has {got} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("illegal move {direction}: blank is at row {zero_row}, column {zero_col}")]
    IllegalMove {
        direction: Direction,
        zero_row: usize,
        zero_col: usize,
    },

    #[error("invalid direction '{input}' (expected one of U, D, L, R)")]
    ParseDirection { input: String },

    #[error("invalid tile list '{input}': {reason}")]
    ParseTiles { input: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
