//! Single-round resolution.
//!
//! A round is a sequence of duels. Each duel draws one alive player from
//! each roster, flips a coin for who wins it, and eliminates the loser.
//! The round ends when one roster has nobody left standing.

use crate::random::RandomSource;
use crate::MatchError;
use match_core::{Roster, Side};

/// Addresses a player inside a match: which roster, and the position in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerRef {
    pub side: Side,
    pub index: usize,
}

impl PlayerRef {
    pub const fn new(side: Side, index: usize) -> Self {
        PlayerRef { side, index }
    }
}

/// One elimination within a round.
///
/// `assist` is only set when an assist was actually credited. It always
/// refers to a teammate of the killer other than the killer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEvent {
    pub killer: PlayerRef,
    pub victim: PlayerRef,
    pub assist: Option<PlayerRef>,
}

/// The result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The roster left with players alive.
    pub winner: Side,
    /// How many of the winner's players survived.
    pub survivors: usize,
    /// Eliminations in the order they happened.
    pub kills: Vec<KillEvent>,
}

/// Resolves rounds between two rosters.
///
/// The simulator only touches player stats and liveness flags. Awarding
/// the round and reviving players afterwards is up to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundSimulator;

impl RoundSimulator {
    /// Plays a round to completion.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyAliveSet`] if either roster has no alive
    /// players when the round starts.
    pub fn resolve<R>(
        &self,
        rosters: &mut [Roster; 2],
        rng: &mut R,
    ) -> Result<RoundOutcome, MatchError>
    where
        R: RandomSource + ?Sized,
    {
        for side in Side::BOTH {
            if rosters[side.index()].alive_count() == 0 {
                return Err(MatchError::EmptyAliveSet { side });
            }
        }

        let mut kills = Vec::new();
        loop {
            let alive = [rosters[0].alive_indices(), rosters[1].alive_indices()];
            if alive[0].is_empty() || alive[1].is_empty() {
                break;
            }

            let picks = [
                alive[0][rng.index(alive[0].len())],
                alive[1][rng.index(alive[1].len())],
            ];
            let killer_side = Side::from_coin(rng.bit());
            let victim_side = killer_side.opposite();

            let killer = PlayerRef::new(killer_side, picks[killer_side.index()]);
            let victim = PlayerRef::new(victim_side, picks[victim_side.index()]);
            let candidate = Self::pick_assist(&alive[killer_side.index()], killer, rng);

            let event = Self::apply_kill(rosters, killer, victim, candidate, rng);
            tracing::trace!(
                killer = %rosters[killer.side.index()].players()[killer.index].name,
                victim = %rosters[victim.side.index()].players()[victim.index].name,
                assisted = event.assist.is_some(),
                "kill"
            );
            kills.push(event);
        }

        let alive = [rosters[0].alive_count(), rosters[1].alive_count()];
        // One victim per duel: exactly one side can run out.
        debug_assert!(alive[0] == 0 || alive[1] == 0);
        debug_assert_ne!(alive[0], alive[1]);
        let winner = if alive[0] > alive[1] { Side::A } else { Side::B };

        Ok(RoundOutcome {
            winner,
            survivors: alive[winner.index()],
            kills,
        })
    }

    /// Draws an assist candidate among the killer's alive teammates.
    fn pick_assist<R>(alive: &[usize], killer: PlayerRef, rng: &mut R) -> Option<PlayerRef>
    where
        R: RandomSource + ?Sized,
    {
        let teammates: Vec<usize> = alive
            .iter()
            .copied()
            .filter(|&i| i != killer.index)
            .collect();
        if teammates.is_empty() {
            return None;
        }
        let index = teammates[rng.index(teammates.len())];
        Some(PlayerRef::new(killer.side, index))
    }

    /// Applies a kill and flips for the assist credit.
    fn apply_kill<R>(
        rosters: &mut [Roster; 2],
        killer: PlayerRef,
        victim: PlayerRef,
        candidate: Option<PlayerRef>,
        rng: &mut R,
    ) -> KillEvent
    where
        R: RandomSource + ?Sized,
    {
        rosters[killer.side.index()].players_mut()[killer.index].record_kill();
        rosters[victim.side.index()].players_mut()[victim.index].eliminate();

        let assist = if rng.bit() { candidate } else { None };
        if let Some(a) = assist {
            rosters[a.side.index()].players_mut()[a.index].record_assist();
        }

        KillEvent {
            killer,
            victim,
            assist,
        }
    }
}
