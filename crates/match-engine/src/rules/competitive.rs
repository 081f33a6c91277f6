//! Regulation plus overtime rules.

use super::WinCondition;
use match_core::Side;

/// Rounds needed to win in regulation.
pub const REGULATION_TARGET: u32 = 16;

/// Once both sides reach this many rounds the match is in overtime.
pub const OVERTIME_THRESHOLD: u32 = 15;

/// Overtime is decided only at the end of segments of this many rounds.
pub const OVERTIME_SEGMENT: u32 = 3;

/// Competitive rules.
///
/// - Regulation: the first side to 16 wins while the other has fewer
///   than 15.
/// - Overtime (both sides on 15 or more): a side wins when its count is
///   `1 mod 3` and it leads by at least two rounds.
///
/// The overtime checkpoints are tied to each side's own count, so a side
/// can lead by two or more between checkpoints without the match ending.
#[derive(Debug, Clone, Copy, Default)]
pub struct Competitive;

impl Competitive {
    fn wins(own: u32, other: u32) -> bool {
        if own == REGULATION_TARGET && other < OVERTIME_THRESHOLD {
            return true;
        }
        own >= OVERTIME_THRESHOLD
            && other >= OVERTIME_THRESHOLD
            && own % OVERTIME_SEGMENT == 1
            && own > other + 1
    }
}

impl WinCondition for Competitive {
    fn decide(&self, rounds_a: u32, rounds_b: u32) -> Option<Side> {
        if Self::wins(rounds_a, rounds_b) {
            Some(Side::A)
        } else if Self::wins(rounds_b, rounds_a) {
            Some(Side::B)
        } else {
            None
        }
    }

    fn name(&self) -> String {
        "competitive".to_string()
    }
}
