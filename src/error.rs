//! Error types for the front end.
//!
//! The solvers themselves never fail: "no solution" is reported through the
//! `success` flag of their outcomes. These errors cover reading input and
//! configuration, and writing reports and traces.

use thiserror::Error;

/// Rejected board input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input: {0:?} is not an integer")]
    Parse(String),

    #[error("Board size N must be between {min} and {max}, got {n}")]
    SizeOutOfRange { n: usize, min: usize, max: usize },

    #[error("Initial positions length must equal N ({expected}), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Row {row} in column {col} is outside 0..{n}")]
    RowOutOfRange { col: usize, row: i32, n: usize },

    #[error("Either initial positions or a random board must be requested")]
    MissingPositions,
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main error type for the `nqueens` front end.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
