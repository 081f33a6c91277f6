//! Core types for round-based team matches.
//!
//! This crate provides the fundamental types used across the simulator:
//! - [`Side`] for addressing the two rosters of a match
//! - [`Player`] for per-player statistics and liveness
//! - [`Roster`] for an ordered team of players with a round counter
//! - [`SortKey`] for ranking players in reports
//! - Roster file parsing and serialization

mod player;
mod roster;
mod roster_file;
mod side;
mod sort;

pub use player::Player;
pub use roster::{Roster, RosterError};
pub use roster_file::{RosterFile, RosterFileError};
pub use side::Side;
pub use sort::SortKey;
