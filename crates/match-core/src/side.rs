//! Match side representation.

use serde::{Deserialize, Serialize};

/// Identifies one of the two rosters in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    A = 0,
    B = 1,
}

impl Side {
    /// Both sides, in roster order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// Returns the opposing side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Returns the index (0 for A, 1 for B).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps a coin flip onto a side: `true` picks A, `false` picks B.
    #[inline]
    pub const fn from_coin(coin: bool) -> Self {
        if coin {
            Side::A
        } else {
            Side::B
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}
