//! First-to-N rules.

use super::WinCondition;
use match_core::Side;

/// The match ends as soon as either side reaches `rounds` round wins.
/// There is no overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstTo {
    rounds: u32,
}

impl FirstTo {
    pub const fn new(rounds: u32) -> Self {
        FirstTo { rounds }
    }

    pub const fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl Default for FirstTo {
    fn default() -> Self {
        FirstTo::new(16)
    }
}

impl WinCondition for FirstTo {
    fn decide(&self, rounds_a: u32, rounds_b: u32) -> Option<Side> {
        if rounds_a >= self.rounds {
            Some(Side::A)
        } else if rounds_b >= self.rounds {
            Some(Side::B)
        } else {
            None
        }
    }

    fn name(&self) -> String {
        format!("first-to-{}", self.rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_to_sixteen() {
        let rules = FirstTo::default();
        assert_eq!(rules.decide(15, 15), None);
        assert_eq!(rules.decide(16, 15), Some(Side::A));
        assert_eq!(rules.decide(2, 16), Some(Side::B));
    }

    #[test]
    fn custom_target() {
        let rules = FirstTo::new(2);
        assert_eq!(rules.rounds(), 2);
        assert_eq!(rules.decide(1, 1), None);
        assert_eq!(rules.decide(1, 2), Some(Side::B));
    }
}
