//! JSON export of finished matches with the full round history.
//!
//! This is useful for analysis and for replaying a seeded run's kill feed
//! without re-simulating it.

use crate::series::MatchSummary;
use chrono::Utc;
use match_core::{Player, Side};
use match_engine::{KillEvent, Match, RoundRecord};
use serde::Serialize;
use std::path::Path;

/// JSON representation of one match.
#[derive(Serialize)]
struct MatchJson<'a> {
    /// Unique identifier for the match.
    id: &'a str,
    /// Rule set the match was played under.
    rules: &'a str,
    /// Seed of the random source, if the run was seeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    /// Winning team name.
    winner: Option<&'a str>,
    /// Losing team name.
    loser: Option<&'a str>,
    /// Final round counts, side A first.
    score: [u32; 2],
    /// Both teams with final stats, side A first.
    teams: [TeamJson<'a>; 2],
    /// Every round in order.
    rounds: Vec<RoundJson<'a>>,
    /// ISO 8601 timestamp when the file was created.
    created_at: String,
}

#[derive(Serialize)]
struct TeamJson<'a> {
    name: &'a str,
    rounds_won: u32,
    players: &'a [Player],
}

#[derive(Serialize)]
struct RoundJson<'a> {
    number: u32,
    winner: &'a str,
    survivors: usize,
    score: [u32; 2],
    kills: Vec<KillJson<'a>>,
}

#[derive(Serialize)]
struct KillJson<'a> {
    killer: &'a str,
    victim: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    assist: Option<&'a str>,
}

impl<'a> MatchJson<'a> {
    fn new(id: &'a str, game: &'a Match, rules: &'a str, seed: Option<u64>, created_at: &str) -> Self {
        let team = |side: Side| {
            let roster = game.roster(side);
            TeamJson {
                name: &roster.name,
                rounds_won: roster.rounds_won(),
                players: roster.players(),
            }
        };

        MatchJson {
            id,
            rules,
            seed,
            winner: game.winner().map(|r| r.name.as_str()),
            loser: game.loser().map(|r| r.name.as_str()),
            score: [game.score().0, game.score().1],
            teams: [team(Side::A), team(Side::B)],
            rounds: game.rounds().iter().map(|r| round_json(game, r)).collect(),
            created_at: created_at.to_string(),
        }
    }
}

fn round_json<'a>(game: &'a Match, record: &'a RoundRecord) -> RoundJson<'a> {
    RoundJson {
        number: record.number,
        winner: &game.roster(record.winner).name,
        survivors: record.survivors,
        score: [record.score.0, record.score.1],
        kills: record.kills.iter().map(|k| kill_json(game, k)).collect(),
    }
}

fn kill_json<'a>(game: &'a Match, event: &KillEvent) -> KillJson<'a> {
    KillJson {
        killer: &game.player(event.killer).name,
        victim: &game.player(event.victim).name,
        assist: event.assist.map(|a| game.player(a).name.as_str()),
    }
}

/// Writes finished matches to a JSON file as an array, one object per match.
///
/// # Arguments
///
/// * `path` - The filesystem path where the JSON file should be written.
/// * `matches` - The finished matches, in the order they were played.
/// * `rules` - Name of the rule set the matches were played under.
/// * `seed` - Seed of the random source, if the run was seeded.
///
/// # File Format
///
/// ```json
/// [
///   {
///     "id": "match-uuid",
///     "rules": "competitive",
///     "seed": 42,
///     "winner": "FaZe",
///     "loser": "G2",
///     "score": [16, 11],
///     "teams": [
///       {
///         "name": "FaZe",
///         "rounds_won": 16,
///         "players": [
///           { "name": "ropz", "team": "FaZe", "kills": 24, "deaths": 15,
///             "assists": 6, "alive": true }
///         ]
///       }
///     ],
///     "rounds": [
///       {
///         "number": 1,
///         "winner": "FaZe",
///         "survivors": 2,
///         "score": [1, 0],
///         "kills": [{ "killer": "ropz", "victim": "NiKo", "assist": "rain" }]
///       }
///     ],
///     "created_at": "2024-01-15T12:00:00Z"
///   }
/// ]
/// ```
pub fn write_json<P: AsRef<Path>>(
    path: P,
    matches: &[MatchSummary],
    rules: &str,
    seed: Option<u64>,
) -> std::io::Result<()> {
    let created_at = Utc::now().to_rfc3339();
    let json: Vec<MatchJson<'_>> = matches
        .iter()
        .map(|m| MatchJson::new(&m.id, &m.game, rules, seed, &created_at))
        .collect();

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &json)?;
    Ok(())
}
