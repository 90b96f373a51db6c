//! Error types for configuration, play, and commitments.

use thiserror::Error;

/// Shown alongside every configuration failure.
pub const USAGE_EXAMPLE: &str = "cyclic-game rock paper scissors";

/// Invalid move-set configuration, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 3 moves are required, got {0} (e.g. {})", USAGE_EXAMPLE)]
    TooFewMoves(usize),

    #[error("the number of moves must be odd, got {0} (e.g. {})", USAGE_EXAMPLE)]
    EvenMoveCount(usize),

    #[error("moves must be unique, {0:?} appears more than once (e.g. {})", USAGE_EXAMPLE)]
    DuplicateMove(String),
}

/// Errors raised while a session is running
#[derive(Debug, Error)]
pub enum GameError {
    /// A label reached the rules engine without belonging to the move set.
    /// Every label is taken from the move set, so this is an internal defect.
    #[error("move {0:?} is not part of the move set")]
    LabelNotFound(String),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode round report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors decoding a published digest or a revealed key
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitmentError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
