//! Match Arena - a round-based team match simulator.
//!
//! This crate wires the simulation engine to the outside world: it loads
//! rosters and presets, runs matches, and reports the results.
//!
//! # Modules
//!
//! - [`config`] - `arena.toml` loading and preset/CLI merging
//! - [`provider`] - roster lookup across config teams and the roster file
//! - [`series`] - repeated matches between one pairing
//! - [`report`] - plain-text result reports
//! - [`json_output`] - JSON export with the full round history

pub mod config;
pub mod json_output;
pub mod provider;
pub mod report;
pub mod series;
