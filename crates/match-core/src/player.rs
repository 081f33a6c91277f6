//! Per-player statistics and liveness.

use serde::Serialize;
use std::fmt;

/// A player taking part in a match.
///
/// Counters only grow over the course of a match. The `alive` flag is
/// round-scoped: it starts `true` every round and flips to `false` once
/// when the player is eliminated.
///
/// Two players are equal when both their name and team name match; the
/// statistics are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Display name, unique within the roster.
    pub name: String,
    /// Name of the roster this player belongs to.
    pub team: String,
    /// Eliminations scored.
    pub kills: u32,
    /// Times eliminated.
    pub deaths: u32,
    /// Credited assists.
    pub assists: u32,
    /// Whether the player is still standing in the current round.
    pub alive: bool,
}

impl Player {
    /// Creates a player with zeroed statistics, alive.
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            team: team.into(),
            kills: 0,
            deaths: 0,
            assists: 0,
            alive: true,
        }
    }

    /// Credits an elimination.
    #[inline]
    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    /// Records a death and takes the player out of the current round.
    #[inline]
    pub fn eliminate(&mut self) {
        debug_assert!(self.alive, "{} eliminated twice in one round", self.name);
        self.deaths += 1;
        self.alive = false;
    }

    /// Credits an assist.
    #[inline]
    pub fn record_assist(&mut self) {
        self.assists += 1;
    }

    /// Brings the player back for the next round.
    #[inline]
    pub fn revive(&mut self) {
        self.alive = true;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.team == other.team
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} kills, {} deaths, {} assists",
            self.name, self.team, self.kills, self.deaths, self.assists
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_zeroed_and_alive() {
        let p = Player::new("s1mple", "Natus Vincere");
        assert_eq!(p.kills, 0);
        assert_eq!(p.deaths, 0);
        assert_eq!(p.assists, 0);
        assert!(p.alive);
    }

    #[test]
    fn eliminate_counts_death_and_clears_alive() {
        let mut p = Player::new("ZywOo", "Vitality");
        p.eliminate();
        assert_eq!(p.deaths, 1);
        assert!(!p.alive);

        p.revive();
        assert!(p.alive);
        assert_eq!(p.deaths, 1);
    }

    #[test]
    fn equality_ignores_stats() {
        let a = Player::new("NiKo", "G2");
        let mut b = Player::new("NiKo", "G2");
        b.record_kill();
        b.record_assist();
        assert_eq!(a, b);

        let c = Player::new("NiKo", "FaZe");
        assert_ne!(a, c);
    }

    #[test]
    fn display() {
        let mut p = Player::new("dev1ce", "Astralis");
        p.record_kill();
        p.record_kill();
        p.eliminate();
        p.record_assist();
        assert_eq!(
            p.to_string(),
            "dev1ce (Astralis): 2 kills, 1 deaths, 1 assists"
        );
    }
}
