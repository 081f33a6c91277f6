//! Error type for match simulation.

use match_core::{RosterError, Side};
use thiserror::Error;

/// Errors that can occur while setting up or simulating a match.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A roster failed validation at match start.
    #[error("invalid roster: {0}")]
    InvalidRoster(#[from] RosterError),

    /// A round was started with a side that has nobody alive.
    #[error("side {side} has no alive players at round start")]
    EmptyAliveSet { side: Side },

    /// A round was requested after the match was decided.
    #[error("match has already ended")]
    AlreadyOver,

    /// The configured round limit was reached without a winner.
    #[error("no winner after {limit} rounds")]
    RoundLimitExceeded { limit: u32 },

    /// The result reporter failed to write its output.
    #[error("failed to report result: {0}")]
    Report(#[from] std::io::Error),
}
