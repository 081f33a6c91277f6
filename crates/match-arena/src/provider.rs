//! Roster lookup across the configuration file and the roster file.

use crate::config::{ArenaConfig, ConfigError, TeamConfig};
use match_core::{Roster, RosterFile};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Supplies fresh rosters by team name.
///
/// Teams defined in `arena.toml` take precedence; anything else is looked
/// up by team name in the roster file, if one is configured. Every call to
/// [`roster`](Self::roster) returns a new, independent roster with zeroed
/// stats.
#[derive(Debug, Clone, Default)]
pub struct RosterProvider {
    teams: BTreeMap<String, TeamConfig>,
    file: Option<RosterFile>,
}

impl RosterProvider {
    /// Builds a provider from the configuration. `roster_file` overrides the
    /// configured roster file path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] or [`ConfigError::RosterFile`] if
    /// the roster file cannot be read or parsed.
    pub fn from_config(
        config: &ArenaConfig,
        roster_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let path: Option<PathBuf> = roster_file
            .map(Path::to_path_buf)
            .or_else(|| config.roster_file.clone());

        let file = match path {
            Some(path) => Some(Self::load_roster_file(&path)?),
            None => None,
        };

        Ok(RosterProvider {
            teams: config
                .teams
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            file,
        })
    }

    /// Builds a provider from already-parsed parts.
    pub fn new(teams: BTreeMap<String, TeamConfig>, file: Option<RosterFile>) -> Self {
        RosterProvider { teams, file }
    }

    fn load_roster_file(path: &Path) -> Result<RosterFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let file = RosterFile::parse(&content).map_err(|source| ConfigError::RosterFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            teams = file.rosters().len(),
            "loaded roster file"
        );
        Ok(file)
    }

    /// Returns a fresh roster for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTeam`] for an invalid configured team,
    /// or [`ConfigError::TeamNotFound`] if the name is unknown.
    pub fn roster(&self, name: &str) -> Result<Roster, ConfigError> {
        if let Some(team) = self.teams.get(name) {
            return Ok(team.to_roster(name)?);
        }
        self.file
            .as_ref()
            .and_then(|f| f.find(name))
            .cloned()
            .ok_or_else(|| ConfigError::TeamNotFound(name.to_string()))
    }

    /// Lists every team that can be requested, with its player count.
    /// Configured teams come first, keyed by their table name.
    pub fn available(&self) -> Vec<(String, usize)> {
        let mut teams: Vec<(String, usize)> = self
            .teams
            .iter()
            .map(|(key, team)| (key.clone(), team.players.len()))
            .collect();
        if let Some(file) = &self.file {
            teams.extend(file.rosters().iter().map(|r| (r.name.clone(), r.len())));
        }
        teams
    }
}
