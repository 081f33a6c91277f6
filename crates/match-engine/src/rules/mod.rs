//! Win-condition abstraction.
//!
//! This module provides the [`WinCondition`] trait which decides, from the
//! two round counters alone, whether a match is over. The controller is
//! rule-agnostic and consults the active win condition after every round.

mod competitive;
mod first_to;

pub use competitive::Competitive;
pub use first_to::FirstTo;

use match_core::Side;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Decides when a match has been won.
///
/// # Example
///
/// ```
/// use match_core::Side;
/// use match_engine::rules::{Competitive, WinCondition};
///
/// assert_eq!(Competitive.decide(16, 3), Some(Side::A));
/// assert_eq!(Competitive.decide(16, 15), None);
/// ```
pub trait WinCondition {
    /// Returns the winning side for the given round counts, or `None` while
    /// the match is still in progress.
    fn decide(&self, rounds_a: u32, rounds_b: u32) -> Option<Side>;

    /// Human-readable rule name.
    fn name(&self) -> String;
}

impl<W: WinCondition + ?Sized> WinCondition for Box<W> {
    fn decide(&self, rounds_a: u32, rounds_b: u32) -> Option<Side> {
        (**self).decide(rounds_a, rounds_b)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Error returned when a rule name cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown rules '{0}': expected 'competitive' or 'first-to-N'")]
pub struct UnknownRules(pub String);

/// The selectable rule sets, by name.
///
/// Parses `"competitive"` and `"first-to-N"` (for example `"first-to-16"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rules {
    #[default]
    Competitive,
    FirstTo(u32),
}

impl WinCondition for Rules {
    fn decide(&self, rounds_a: u32, rounds_b: u32) -> Option<Side> {
        match self {
            Rules::Competitive => Competitive.decide(rounds_a, rounds_b),
            Rules::FirstTo(rounds) => FirstTo::new(*rounds).decide(rounds_a, rounds_b),
        }
    }

    fn name(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Rules {
    type Err = UnknownRules;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized == "competitive" {
            return Ok(Rules::Competitive);
        }
        normalized
            .strip_prefix("first-to-")
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .map(Rules::FirstTo)
            .ok_or_else(|| UnknownRules(s.to_string()))
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rules::Competitive => write!(f, "competitive"),
            Rules::FirstTo(n) => write!(f, "first-to-{}", n),
        }
    }
}
