//! Team rosters.

use crate::{Player, SortKey};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Reasons a roster cannot take part in a match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster '{team}' has no players")]
    Empty { team: String },

    #[error("roster '{team}' contains a player with an empty name")]
    EmptyPlayerName { team: String },

    #[error("roster '{team}' lists player '{player}' more than once")]
    DuplicatePlayer { team: String, player: String },
}

/// An ordered team of players together with its round counter.
///
/// The roster owns its players exclusively. `rounds_won` can only be
/// advanced one round at a time through [`Roster::award_round`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// Team name.
    pub name: String,
    rounds_won: u32,
    players: Vec<Player>,
}

impl Roster {
    /// Creates a roster with zero rounds won and fresh players named
    /// `player_names`, in order. No validation is performed; see
    /// [`Roster::validate`].
    pub fn new<I, S>(name: impl Into<String>, player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let players = player_names
            .into_iter()
            .map(|p| Player::new(p, name.clone()))
            .collect();
        Roster {
            name,
            rounds_won: 0,
            players,
        }
    }

    /// Creates a roster and validates it in one step.
    pub fn try_new<I, S>(name: impl Into<String>, player_names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster = Self::new(name, player_names);
        roster.validate()?;
        Ok(roster)
    }

    /// Checks that the roster has at least one player and that player
    /// names are non-empty and unique.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.players.is_empty() {
            return Err(RosterError::Empty {
                team: self.name.clone(),
            });
        }

        let mut seen = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if player.name.is_empty() {
                return Err(RosterError::EmptyPlayerName {
                    team: self.name.clone(),
                });
            }
            if !seen.insert(player.name.as_str()) {
                return Err(RosterError::DuplicatePlayer {
                    team: self.name.clone(),
                    player: player.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the number of rounds this roster has won.
    #[inline]
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// Credits one round win.
    #[inline]
    pub fn award_round(&mut self) {
        self.rounds_won += 1;
    }

    /// Returns all players in roster order.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns mutable access to the players. The roster size is fixed.
    #[inline]
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Returns the number of players.
    #[inline]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the roster has no players.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Looks up a player by name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Returns the roster indices of players still alive this round.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the players still alive this round.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.alive)
    }

    /// Returns how many players are still alive this round.
    pub fn alive_count(&self) -> usize {
        self.alive_players().count()
    }

    /// Revives every player for the next round.
    pub fn reset_round(&mut self) {
        for player in &mut self.players {
            player.revive();
        }
    }

    /// Returns the players ordered by `key`. The roster itself is left in
    /// its current order.
    pub fn ranked(&self, key: SortKey) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| key.compare(a, b));
        ranked
    }

    /// Total kills across the roster.
    pub fn total_kills(&self) -> u32 {
        self.players.iter().map(|p| p.kills).sum()
    }

    /// Total deaths across the roster.
    pub fn total_deaths(&self) -> u32 {
        self.players.iter().map(|p| p.deaths).sum()
    }

    /// Total assists across the roster.
    pub fn total_assists(&self) -> u32 {
        self.players.iter().map(|p| p.assists).sum()
    }
}

/// Formats the roster as a roster file line: `Name: 3, ['a', 'b']`.
impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, [", self.name, self.rounds_won)?;
        for (i, player) in self.players.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            // Prefer single quotes, switch when the name contains one.
            if player.name.contains('\'') && !player.name.contains('"') {
                write!(f, "\"{}\"", player.name)?;
            } else {
                write!(f, "'{}'", player.name)?;
            }
        }
        write!(f, "]")
    }
}
