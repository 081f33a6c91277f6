//! Roster file parsing and serialization.
//!
//! A roster file holds one team per line in the form
//! `Team Name: 0, ['player1', 'player2']`, which is also what
//! [`Roster`]'s `Display` produces. Blank lines are ignored.

use crate::{Roster, RosterError};
use thiserror::Error;

/// Errors that can occur when parsing a roster file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterFileError {
    #[error("line {line}: expected 'Team: rounds, [players]'")]
    MissingSeparator { line: usize },

    #[error("line {line}: invalid round count '{value}'")]
    InvalidRoundCount { line: usize, value: String },

    #[error("line {line}: malformed player list: {reason}")]
    MalformedPlayerList { line: usize, reason: String },

    #[error("line {line}: {source}")]
    InvalidRoster {
        line: usize,
        #[source]
        source: RosterError,
    },
}

/// A parsed roster file.
///
/// Every roster comes back ready for a new match: the stored round count is
/// read and checked but not carried over, and all player stats start at
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFile {
    rosters: Vec<Roster>,
}

impl RosterFile {
    /// Builds a roster file from existing rosters.
    pub fn from_rosters(rosters: Vec<Roster>) -> Self {
        RosterFile { rosters }
    }

    /// Parses roster file contents.
    pub fn parse(content: &str) -> Result<Self, RosterFileError> {
        let mut rosters = Vec::new();
        for (i, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            rosters.push(Self::parse_line(line, i + 1)?);
        }
        Ok(RosterFile { rosters })
    }

    /// Parses a single roster line. `line_no` is used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Roster, RosterFileError> {
        // Team names may themselves contain ": ", so try each separator
        // until one is followed by a round count.
        let mut first_value = None;
        for (pos, _) in line.match_indices(": ") {
            let name = &line[..pos];
            let rest = &line[pos + 2..];
            let (count, list) = match rest.split_once(", ") {
                Some(parts) => parts,
                None => (rest, ""),
            };
            if count.trim().parse::<u32>().is_err() {
                first_value.get_or_insert(count);
                continue;
            }

            let players = Self::parse_player_list(list.trim(), line_no)?;
            let roster = Roster::new(name.trim(), players);
            roster
                .validate()
                .map_err(|source| RosterFileError::InvalidRoster {
                    line: line_no,
                    source,
                })?;
            return Ok(roster);
        }

        match first_value {
            Some(value) => Err(RosterFileError::InvalidRoundCount {
                line: line_no,
                value: value.to_string(),
            }),
            None => Err(RosterFileError::MissingSeparator { line: line_no }),
        }
    }

    fn parse_player_list(list: &str, line_no: usize) -> Result<Vec<String>, RosterFileError> {
        let malformed = |reason: &str| RosterFileError::MalformedPlayerList {
            line: line_no,
            reason: reason.to_string(),
        };

        let inner = list
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| malformed("expected a bracketed list"))?;

        let mut players = Vec::new();
        let mut chars = inner.trim().chars().peekable();
        while chars.peek().is_some() {
            let quote = match chars.next() {
                Some(q @ ('\'' | '"')) => q,
                _ => return Err(malformed("expected a quoted player name")),
            };

            let mut name = String::new();
            loop {
                match chars.next() {
                    Some(c) if c == quote => break,
                    Some(c) => name.push(c),
                    None => return Err(malformed("unterminated player name")),
                }
            }
            players.push(name);

            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            match chars.next() {
                None => break,
                Some(',') => {
                    while chars.next_if(|c| c.is_whitespace()).is_some() {}
                    if chars.peek().is_none() {
                        return Err(malformed("trailing comma"));
                    }
                }
                Some(c) => return Err(malformed(&format!("unexpected character '{}'", c))),
            }
        }
        Ok(players)
    }

    /// Returns all rosters in file order.
    pub fn rosters(&self) -> &[Roster] {
        &self.rosters
    }

    /// Consumes the file and returns its rosters.
    pub fn into_rosters(self) -> Vec<Roster> {
        self.rosters
    }

    /// Looks up a roster by team name, exact match first, then ignoring case.
    pub fn find(&self, name: &str) -> Option<&Roster> {
        self.rosters
            .iter()
            .find(|r| r.name == name)
            .or_else(|| self.rosters.iter().find(|r| r.name.eq_ignore_ascii_case(name)))
    }

    /// Serializes the file, one roster per line.
    pub fn to_file_string(&self) -> String {
        let mut out = String::new();
        for roster in &self.rosters {
            out.push_str(&roster.to_string());
            out.push('\n');
        }
        out
    }
}
