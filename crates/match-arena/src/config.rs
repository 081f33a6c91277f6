//! Configuration file loading for the match arena.
//!
//! This module provides types and functions for loading arena configuration
//! from TOML files and merging presets with command-line overrides.

use match_core::{Roster, RosterError, SortKey};
use match_engine::rules::{Rules, UnknownRules};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or using configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a file from disk.
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Failed to parse the roster file.
    #[error("Failed to parse roster file {path}: {source}")]
    RosterFile {
        path: PathBuf,
        #[source]
        source: match_core::RosterFileError,
    },
    /// A team defined in the configuration is not a valid roster.
    #[error("Invalid team: {0}")]
    InvalidTeam(#[from] RosterError),
    /// Requested team was not found in the configuration or roster file.
    #[error("Team not found: {0}")]
    TeamNotFound(String),
    /// Requested preset was not found in the configuration.
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
    /// The rules name could not be parsed.
    #[error(transparent)]
    InvalidRules(#[from] UnknownRules),
}

/// A team defined directly in the configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TeamConfig {
    /// Display name. Defaults to the table key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Player names, in roster order.
    pub players: Vec<String>,
}

impl TeamConfig {
    /// Builds a validated roster. `key` is used when no display name is set.
    pub fn to_roster(&self, key: &str) -> Result<Roster, RosterError> {
        let name = self.name.as_deref().unwrap_or(key);
        Roster::try_new(name, self.players.iter().cloned())
    }
}

/// Configuration for a match preset.
///
/// Presets define reusable match settings: how many matches to run, which
/// rules to use, how to rank players in the report, and an optional seed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PresetConfig {
    /// Number of matches to simulate. Defaults to 1.
    #[serde(default = "default_runs")]
    pub runs: u32,
    /// Rules name, `competitive` or `first-to-N`. Defaults to `competitive`.
    #[serde(default = "default_rules")]
    pub rules: String,
    /// Player ranking in reports. Defaults to kills.
    #[serde(default = "default_sort")]
    pub sort: SortKey,
    /// Seed for reproducible runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Abort a match that has not been decided after this many rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rounds: Option<u32>,
}

impl Default for PresetConfig {
    fn default() -> Self {
        PresetConfig {
            runs: default_runs(),
            rules: default_rules(),
            sort: default_sort(),
            seed: None,
            max_rounds: None,
        }
    }
}

fn default_runs() -> u32 {
    1
}

fn default_rules() -> String {
    "competitive".to_string()
}

fn default_sort() -> SortKey {
    SortKey::Kills
}

/// Main arena configuration structure.
///
/// Contains team definitions and match presets loaded from the
/// configuration file. Uses `arena.toml` in the current directory
/// by default.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ArenaConfig {
    /// Roster file to look teams up in, after the teams below.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_file: Option<PathBuf>,
    /// Map of team keys to their definitions.
    #[serde(default)]
    pub teams: HashMap<String, TeamConfig>,
    /// Map of preset names to their configurations.
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,
}

impl ArenaConfig {
    /// Loads the arena configuration from [`Self::config_path()`].
    ///
    /// If the file does not exist, returns a default empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the arena configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration path, `arena.toml` in the current
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("arena.toml")
    }

    /// Retrieves a team definition by key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TeamNotFound`] if no team with the given key exists.
    pub fn get_team(&self, key: &str) -> Result<&TeamConfig, ConfigError> {
        self.teams
            .get(key)
            .ok_or_else(|| ConfigError::TeamNotFound(key.to_string()))
    }

    /// Retrieves a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PresetNotFound`] if no preset with the given name exists.
    pub fn get_preset(&self, name: &str) -> Result<&PresetConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
    }
}

/// Command-line values that take precedence over a preset.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub runs: Option<u32>,
    pub rules: Option<String>,
    pub sort: Option<String>,
    pub seed: Option<u64>,
    pub max_rounds: Option<u32>,
}

/// Fully resolved settings for a match run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSettings {
    pub runs: u32,
    pub rules: Rules,
    pub sort: SortKey,
    pub seed: Option<u64>,
    pub max_rounds: Option<u32>,
}

impl MatchSettings {
    /// Merges `overrides` on top of `preset` (or the preset defaults).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRules`] if the resulting rules name
    /// cannot be parsed.
    pub fn resolve(
        preset: Option<&PresetConfig>,
        overrides: &Overrides,
    ) -> Result<Self, ConfigError> {
        let defaults = PresetConfig::default();
        let preset = preset.unwrap_or(&defaults);

        let rules = overrides
            .rules
            .as_deref()
            .unwrap_or(preset.rules.as_str())
            .parse::<Rules>()?;
        let sort = overrides
            .sort
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or(preset.sort);

        Ok(MatchSettings {
            runs: overrides.runs.unwrap_or(preset.runs).max(1),
            rules,
            sort,
            seed: overrides.seed.or(preset.seed),
            max_rounds: overrides.max_rounds.or(preset.max_rounds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_toml_config() {
        let toml_content = r#"
roster_file = "teams.txt"

[teams.navi]
name = "Natus Vincere"
players = ["s1mple", "electronic", "Perfecto", "b1t", "sdy"]

[teams.g2]
players = ["NiKo", "huNter-", "m0NESY"]

[presets.quick]
runs = 5
rules = "first-to-9"
sort = "deaths"
seed = 42

[presets.marathon]
runs = 100
max_rounds = 200
"#;

        let config: ArenaConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.roster_file, Some(PathBuf::from("teams.txt")));

        // Verify teams
        assert_eq!(config.teams.len(), 2);
        let navi = config.get_team("navi").unwrap();
        assert_eq!(navi.name.as_deref(), Some("Natus Vincere"));
        assert_eq!(navi.players.len(), 5);

        let g2 = config.get_team("g2").unwrap();
        assert!(g2.name.is_none());
        assert_eq!(g2.to_roster("g2").unwrap().name, "g2");

        // Verify presets
        let quick = config.get_preset("quick").unwrap();
        assert_eq!(quick.runs, 5);
        assert_eq!(quick.rules, "first-to-9");
        assert_eq!(quick.sort, SortKey::Deaths);
        assert_eq!(quick.seed, Some(42));
        assert_eq!(quick.max_rounds, None);

        let marathon = config.get_preset("marathon").unwrap();
        assert_eq!(marathon.runs, 100);
        assert_eq!(marathon.max_rounds, Some(200));
    }

    #[test]
    fn test_parse_preset_with_defaults() {
        let config: ArenaConfig = toml::from_str("[presets.minimal]").unwrap();
        let minimal = config.get_preset("minimal").unwrap();
        assert_eq!(minimal, &PresetConfig::default());
        assert_eq!(minimal.runs, 1);
        assert_eq!(minimal.rules, "competitive");
        assert_eq!(minimal.sort, SortKey::Kills);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_name() {
        let config: ArenaConfig = toml::from_str(
            r#"
[presets.odd]
sort = "headshots"
"#,
        )
        .unwrap();
        assert_eq!(config.get_preset("odd").unwrap().sort, SortKey::Name);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert!(config.teams.is_empty());
        assert!(config.presets.is_empty());
        assert!(config.roster_file.is_none());
    }

    #[test]
    fn test_missing_team_and_preset() {
        let config = ArenaConfig::default();
        assert!(matches!(
            config.get_team("nobody"),
            Err(ConfigError::TeamNotFound(name)) if name == "nobody"
        ));
        assert!(matches!(
            config.get_preset("nothing"),
            Err(ConfigError::PresetNotFound(name)) if name == "nothing"
        ));
    }

    #[test]
    fn test_invalid_team_roster() {
        let team = TeamConfig {
            name: None,
            players: vec!["a".to_string(), "a".to_string()],
        };
        assert!(matches!(
            team.to_roster("dupes"),
            Err(RosterError::DuplicatePlayer { .. })
        ));
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(ArenaConfig::config_path(), PathBuf::from("arena.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[teams.solo]\nplayers = [\"one\"]").unwrap();

        let config = ArenaConfig::load_from(file.path()).unwrap();
        assert_eq!(config.get_team("solo").unwrap().players, vec!["one"]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ArenaConfig::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "teams = [").unwrap();
        assert!(matches!(
            ArenaConfig::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_preset_serialization_roundtrip() {
        let preset = PresetConfig {
            runs: 3,
            rules: "first-to-5".to_string(),
            sort: SortKey::Assists,
            seed: Some(9),
            max_rounds: Some(40),
        };
        let serialized = toml::to_string(&preset).unwrap();
        let deserialized: PresetConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, preset);
    }

    #[test]
    fn test_settings_default_without_preset() {
        let settings = MatchSettings::resolve(None, &Overrides::default()).unwrap();
        assert_eq!(
            settings,
            MatchSettings {
                runs: 1,
                rules: Rules::Competitive,
                sort: SortKey::Kills,
                seed: None,
                max_rounds: None,
            }
        );
    }

    #[test]
    fn test_settings_use_preset() {
        let preset = PresetConfig {
            runs: 42,
            rules: "first-to-16".to_string(),
            sort: SortKey::Alive,
            seed: Some(1),
            max_rounds: Some(60),
        };
        let settings = MatchSettings::resolve(Some(&preset), &Overrides::default()).unwrap();
        assert_eq!(settings.runs, 42);
        assert_eq!(settings.rules, Rules::FirstTo(16));
        assert_eq!(settings.sort, SortKey::Alive);
        assert_eq!(settings.seed, Some(1));
        assert_eq!(settings.max_rounds, Some(60));
    }

    #[test]
    fn test_overrides_beat_preset() {
        let preset = PresetConfig {
            runs: 42,
            seed: Some(1),
            ..PresetConfig::default()
        };
        let overrides = Overrides {
            runs: Some(2),
            rules: Some("first-to-3".to_string()),
            sort: Some("name".to_string()),
            seed: Some(77),
            max_rounds: Some(10),
        };
        let settings = MatchSettings::resolve(Some(&preset), &overrides).unwrap();
        assert_eq!(settings.runs, 2);
        assert_eq!(settings.rules, Rules::FirstTo(3));
        assert_eq!(settings.sort, SortKey::Name);
        assert_eq!(settings.seed, Some(77));
        assert_eq!(settings.max_rounds, Some(10));
    }

    #[test]
    fn test_zero_runs_is_clamped() {
        let overrides = Overrides {
            runs: Some(0),
            ..Overrides::default()
        };
        let settings = MatchSettings::resolve(None, &overrides).unwrap();
        assert_eq!(settings.runs, 1);
    }

    #[test]
    fn test_invalid_rules_override() {
        let overrides = Overrides {
            rules: Some("bo3".to_string()),
            ..Overrides::default()
        };
        assert!(matches!(
            MatchSettings::resolve(None, &overrides),
            Err(ConfigError::InvalidRules(_))
        ));
    }
}
