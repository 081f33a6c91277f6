//! Series runner - repeats one pairing for several matches.
//!
//! Each match gets its own deep copy of the starting rosters, so stats
//! never leak from one match into the next. All matches draw from the same
//! random source in sequence, which keeps a seeded series reproducible.

use match_core::{Roster, Side};
use match_engine::rules::{Rules, WinCondition};
use match_engine::{Match, MatchController, MatchError, RandomSource, ResultReporter};

/// A finished match with its identifier.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    /// Unique match id (UUID v4).
    pub id: String,
    /// The decided match, including round history.
    pub game: Match,
}

/// Outcome of a whole series.
#[derive(Debug, Clone)]
pub struct SeriesResult {
    /// Every match in the order played.
    pub matches: Vec<MatchSummary>,
    /// Match wins per side, indexed by [`Side::index`].
    pub wins: [u32; 2],
}

impl SeriesResult {
    /// Match wins for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side.index()]
    }
}

/// Runs a fixed number of matches between the same two rosters.
#[derive(Debug, Clone)]
pub struct SeriesRunner {
    controller: MatchController<Rules>,
    runs: u32,
}

impl SeriesRunner {
    /// Creates a runner for `runs` matches (at least one) under `rules`.
    pub fn new(rules: Rules, runs: u32) -> Self {
        SeriesRunner {
            controller: MatchController::with_rules(rules),
            runs: runs.max(1),
        }
    }

    /// Applies a per-match round limit.
    pub fn with_round_limit(mut self, limit: Option<u32>) -> Self {
        if let Some(limit) = limit {
            self.controller = self.controller.with_round_limit(limit);
        }
        self
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn rules(&self) -> &Rules {
        self.controller.rules()
    }

    /// Plays the series. Every decided match is passed to `reporter`.
    ///
    /// # Errors
    ///
    /// Stops at the first match that fails; matches already played are
    /// discarded.
    pub fn run<R, P>(
        &self,
        a: &Roster,
        b: &Roster,
        rng: &mut R,
        reporter: &mut P,
    ) -> Result<SeriesResult, MatchError>
    where
        R: RandomSource + ?Sized,
        P: ResultReporter + ?Sized,
    {
        let mut matches = Vec::with_capacity(self.runs as usize);
        let mut wins = [0u32; 2];

        for run in 1..=self.runs {
            let id = uuid::Uuid::new_v4().to_string();
            tracing::info!(
                run,
                of = self.runs,
                id = %id,
                rules = %self.rules().name(),
                "starting match: {} vs {}",
                a.name,
                b.name
            );

            let game = Match::new(a.clone(), b.clone())?;
            let game = self.controller.simulate(game, rng, reporter)?;
            if let Some(side) = game.winning_side() {
                wins[side.index()] += 1;
            }
            matches.push(MatchSummary { id, game });
        }

        Ok(SeriesResult { matches, wins })
    }
}
