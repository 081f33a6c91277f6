//! Round and match simulation for two-roster elimination games.
//!
//! This crate provides:
//! - [`RandomSource`] - the injected source of every random decision
//! - [`RoundSimulator`] - resolves a single round by a chain of duels
//! - [`WinCondition`] - trait for match-ending rules, with
//!   [`Competitive`](rules::Competitive) and [`FirstTo`](rules::FirstTo)
//! - [`Match`] and [`MatchController`] - the match state machine
//! - [`ResultReporter`] - output sink for decided matches
//!
//! # Example
//!
//! ```
//! use match_core::{Roster, Side};
//! use match_engine::{FixedRandom, Match, MatchController, NoopReporter};
//!
//! let a = Roster::new("Alpha", ["a1", "a2"]);
//! let b = Roster::new("Bravo", ["b1", "b2"]);
//!
//! // A source that always hands the duel to side A.
//! let mut rng = FixedRandom::new(0, true);
//! let game = MatchController::new()
//!     .simulate(Match::new(a, b).unwrap(), &mut rng, &mut NoopReporter)
//!     .unwrap();
//!
//! assert_eq!(game.winning_side(), Some(Side::A));
//! assert_eq!(game.score(), (16, 0));
//! ```

mod controller;
mod error;
pub mod random;
mod reporter;
mod round;
pub mod rules;

pub use controller::{Match, MatchController, MatchState, RoundRecord};
pub use error::MatchError;
pub use random::{FixedRandom, RandomSource, RngSource};
pub use reporter::{NoopReporter, ResultReporter};
pub use round::{KillEvent, PlayerRef, RoundOutcome, RoundSimulator};
pub use rules::{Rules, WinCondition};
