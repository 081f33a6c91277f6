//! Result reporting interface.

use match_core::Roster;
use std::io;

/// Receives the final rosters once a match is decided.
///
/// Reporters are output sinks only; nothing they do feeds back into the
/// simulation. Write failures are surfaced to the caller of
/// [`MatchController::simulate`](crate::MatchController::simulate).
pub trait ResultReporter {
    fn report(&mut self, winner: &Roster, loser: &Roster) -> io::Result<()>;
}

impl<P: ResultReporter + ?Sized> ResultReporter for &mut P {
    fn report(&mut self, winner: &Roster, loser: &Roster) -> io::Result<()> {
        (**self).report(winner, loser)
    }
}

/// Discards results.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ResultReporter for NoopReporter {
    fn report(&mut self, _winner: &Roster, _loser: &Roster) -> io::Result<()> {
        Ok(())
    }
}
