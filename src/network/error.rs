//! Error types for edge-list construction.

use thiserror::Error;

/// Errors returned by [`EdgeListBuilder::build`](super::EdgeListBuilder::build).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    /// A lineup that can't be expanded into player pairs.
    #[error("malformed lineup record #{index}: {reason}")]
    MalformedRecord {
        index: usize,
        reason: MalformedReason,
    },
}

/// Why a lineup record was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedReason {
    #[error("expected {expected} players, found {found}")]
    PlayerCount { expected: usize, found: usize },

    #[error("player '{0}' appears more than once")]
    DuplicatePlayer(String),

    #[error("minutes must be a non-negative number, got {0}")]
    InvalidMinutes(f64),

    #[error("rating must be a finite number, got {0}")]
    InvalidRating(f64),
}
