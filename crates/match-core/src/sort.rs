//! Player ranking keys for reports.

use crate::Player;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How players are ordered when a roster is printed.
///
/// Counter keys rank highest first, `Alive` ranks survivors first and
/// `Name` sorts alphabetically. Ties keep roster order. Unrecognized key
/// names fall back to [`SortKey::Name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    Kills,
    Deaths,
    Assists,
    Alive,
    #[default]
    Name,
}

impl SortKey {
    /// Parses a key name, falling back to [`SortKey::Name`] for anything
    /// unrecognized.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "kills" => SortKey::Kills,
            "deaths" => SortKey::Deaths,
            "assists" => SortKey::Assists,
            "alive" => SortKey::Alive,
            _ => SortKey::Name,
        }
    }

    /// Returns the canonical key name.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Kills => "kills",
            SortKey::Deaths => "deaths",
            SortKey::Assists => "assists",
            SortKey::Alive => "alive",
            SortKey::Name => "name",
        }
    }

    /// Compares two players under this key.
    pub fn compare(self, a: &Player, b: &Player) -> Ordering {
        match self {
            SortKey::Kills => b.kills.cmp(&a.kills),
            SortKey::Deaths => b.deaths.cmp(&a.deaths),
            SortKey::Assists => b.assists.cmp(&a.assists),
            SortKey::Alive => b.alive.cmp(&a.alive),
            SortKey::Name => a.name.cmp(&b.name),
        }
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        SortKey::parse(s)
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::parse(&s)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, kills: u32, deaths: u32, assists: u32, alive: bool) -> Player {
        let mut p = Player::new(name, "Team");
        p.kills = kills;
        p.deaths = deaths;
        p.assists = assists;
        p.alive = alive;
        p
    }

    fn order(key: SortKey, players: &[Player]) -> Vec<&str> {
        let mut refs: Vec<&Player> = players.iter().collect();
        refs.sort_by(|a, b| key.compare(a, b));
        refs.into_iter().map(|p| p.name.as_str()).collect()
    }

    fn sample() -> Vec<Player> {
        vec![
            player("charlie", 5, 1, 0, false),
            player("alpha", 9, 3, 2, true),
            player("bravo", 1, 7, 4, false),
        ]
    }

    #[test]
    fn parse_known_keys() {
        assert_eq!(SortKey::parse("kills"), SortKey::Kills);
        assert_eq!(SortKey::parse("deaths"), SortKey::Deaths);
        assert_eq!(SortKey::parse("assists"), SortKey::Assists);
        assert_eq!(SortKey::parse("alive"), SortKey::Alive);
        assert_eq!(SortKey::parse(" Kills "), SortKey::Kills);
    }

    #[test]
    fn parse_unknown_falls_back_to_name() {
        assert_eq!(SortKey::parse(""), SortKey::Name);
        assert_eq!(SortKey::parse("headshots"), SortKey::Name);
        assert_eq!(SortKey::default(), SortKey::Name);
    }

    #[test]
    fn counter_keys_rank_descending() {
        let players = sample();
        assert_eq!(order(SortKey::Kills, &players), ["alpha", "charlie", "bravo"]);
        assert_eq!(order(SortKey::Deaths, &players), ["bravo", "alpha", "charlie"]);
        assert_eq!(order(SortKey::Assists, &players), ["bravo", "alpha", "charlie"]);
    }

    #[test]
    fn alive_first_keeps_roster_order_on_ties() {
        let players = sample();
        assert_eq!(order(SortKey::Alive, &players), ["alpha", "charlie", "bravo"]);
    }

    #[test]
    fn name_ascending() {
        let players = sample();
        assert_eq!(order(SortKey::Name, &players), ["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in [
            SortKey::Kills,
            SortKey::Deaths,
            SortKey::Assists,
            SortKey::Alive,
            SortKey::Name,
        ] {
            assert_eq!(SortKey::parse(&key.to_string()), key);
        }
    }
}
