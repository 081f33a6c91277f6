//! Match state and the round-by-round controller.
//!
//! A [`Match`] owns both rosters, the round history, and the match state.
//! The [`MatchController`] advances it one round at a time:
//! - resolve the round with the [`RoundSimulator`]
//! - award the round to the winner
//! - revive every player on both rosters
//! - ask the [`WinCondition`] whether the match is over

use crate::random::RandomSource;
use crate::reporter::ResultReporter;
use crate::round::{KillEvent, PlayerRef, RoundSimulator};
use crate::rules::{Competitive, WinCondition};
use crate::MatchError;
use match_core::{Player, Roster, Side};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    Won { winner: Side },
}

/// A completed round in the match history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number.
    pub number: u32,
    /// Side that won the round.
    pub winner: Side,
    /// Players left standing on the winning side.
    pub survivors: usize,
    /// Round counts `(A, B)` after this round was awarded.
    pub score: (u32, u32),
    /// Eliminations in order.
    pub kills: Vec<KillEvent>,
}

/// A match between two rosters.
///
/// Winner and loser are decided together and never change afterwards.
#[derive(Debug, Clone)]
pub struct Match {
    rosters: [Roster; 2],
    state: MatchState,
    rounds: Vec<RoundRecord>,
}

impl Match {
    /// Creates a match between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidRoster`] if either roster is empty or
    /// has empty or duplicate player names.
    pub fn new(a: Roster, b: Roster) -> Result<Self, MatchError> {
        a.validate()?;
        b.validate()?;
        Ok(Match {
            rosters: [a, b],
            state: MatchState::InProgress,
            rounds: Vec::new(),
        })
    }

    /// Returns the roster on `side`.
    pub fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side.index()]
    }

    /// Returns both rosters, A first.
    pub fn rosters(&self) -> &[Roster; 2] {
        &self.rosters
    }

    /// Returns the player addressed by `player`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range for that roster.
    pub fn player(&self, player: PlayerRef) -> &Player {
        &self.rosters[player.side.index()].players()[player.index]
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, MatchState::Won { .. })
    }

    /// Returns the winning side once the match is decided.
    pub fn winning_side(&self) -> Option<Side> {
        match self.state {
            MatchState::Won { winner } => Some(winner),
            MatchState::InProgress => None,
        }
    }

    pub fn winner(&self) -> Option<&Roster> {
        self.winning_side().map(|side| self.roster(side))
    }

    pub fn loser(&self) -> Option<&Roster> {
        self.winning_side().map(|side| self.roster(side.opposite()))
    }

    /// Round counts as `(A, B)`.
    pub fn score(&self) -> (u32, u32) {
        (self.rosters[0].rounds_won(), self.rosters[1].rounds_won())
    }

    /// Rounds played so far, in order.
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Consumes the match and returns the rosters, A first.
    pub fn into_rosters(self) -> [Roster; 2] {
        self.rosters
    }
}

/// Drives a [`Match`] until its win condition fires.
///
/// # Example
///
/// ```
/// use match_core::Roster;
/// use match_engine::{Match, MatchController, NoopReporter, RngSource};
///
/// let a = Roster::new("Alpha", ["a1", "a2", "a3"]);
/// let b = Roster::new("Bravo", ["b1", "b2", "b3"]);
/// let game = Match::new(a, b).unwrap();
///
/// let controller = MatchController::new();
/// let done = controller
///     .simulate(game, &mut RngSource::seeded(1), &mut NoopReporter)
///     .unwrap();
/// assert!(done.is_over());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchController<W = Competitive> {
    rules: W,
    simulator: RoundSimulator,
    round_limit: Option<u32>,
}

impl MatchController<Competitive> {
    /// A controller using competitive rules and no round limit.
    pub fn new() -> Self {
        Self::with_rules(Competitive)
    }
}

impl<W: WinCondition> MatchController<W> {
    /// A controller using `rules` and no round limit.
    pub fn with_rules(rules: W) -> Self {
        MatchController {
            rules,
            simulator: RoundSimulator,
            round_limit: None,
        }
    }

    /// Stops [`simulate`](Self::simulate) with
    /// [`MatchError::RoundLimitExceeded`] once `limit` rounds have been
    /// played without a winner.
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }

    pub fn rules(&self) -> &W {
        &self.rules
    }

    pub fn round_limit(&self) -> Option<u32> {
        self.round_limit
    }

    /// Plays one round and returns the side that won it.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::AlreadyOver`] if the match is decided, or
    /// [`MatchError::EmptyAliveSet`] if a roster has nobody alive.
    pub fn play_round<R>(&self, game: &mut Match, rng: &mut R) -> Result<Side, MatchError>
    where
        R: RandomSource + ?Sized,
    {
        if game.is_over() {
            return Err(MatchError::AlreadyOver);
        }

        let outcome = self.simulator.resolve(&mut game.rosters, rng)?;
        game.rosters[outcome.winner.index()].award_round();
        for roster in &mut game.rosters {
            roster.reset_round();
        }

        let score = game.score();
        let number = game.rounds_played() + 1;
        tracing::debug!(
            round = number,
            winner = %game.roster(outcome.winner).name,
            survivors = outcome.survivors,
            score_a = score.0,
            score_b = score.1,
            "round complete"
        );
        game.rounds.push(RoundRecord {
            number,
            winner: outcome.winner,
            survivors: outcome.survivors,
            score,
            kills: outcome.kills,
        });

        if let Some(winner) = self.rules.decide(score.0, score.1) {
            game.state = MatchState::Won { winner };
            tracing::info!(
                winner = %game.roster(winner).name,
                loser = %game.roster(winner.opposite()).name,
                rounds = number,
                "match decided {}-{}",
                score.0,
                score.1
            );
        }

        Ok(outcome.winner)
    }

    /// Plays rounds until the match is decided, then hands the final
    /// rosters to `reporter`.
    ///
    /// # Errors
    ///
    /// Any error from [`play_round`](Self::play_round),
    /// [`MatchError::RoundLimitExceeded`] if a round limit is set and
    /// reached, or [`MatchError::Report`] if the reporter fails.
    pub fn simulate<R, P>(
        &self,
        mut game: Match,
        rng: &mut R,
        reporter: &mut P,
    ) -> Result<Match, MatchError>
    where
        R: RandomSource + ?Sized,
        P: ResultReporter + ?Sized,
    {
        while !game.is_over() {
            if let Some(limit) = self.round_limit {
                if game.rounds_played() >= limit {
                    tracing::warn!(limit, score = ?game.score(), "round limit reached");
                    return Err(MatchError::RoundLimitExceeded { limit });
                }
            }
            self.play_round(&mut game, rng)?;
        }

        if let (Some(winner), Some(loser)) = (game.winner(), game.loser()) {
            reporter.report(winner, loser)?;
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, RngSource};
    use crate::reporter::NoopReporter;
    use crate::rules::FirstTo;

    fn new_match() -> Match {
        Match::new(
            Roster::new("Alpha", ["a1", "a2"]),
            Roster::new("Bravo", ["b1", "b2"]),
        )
        .unwrap()
    }

    #[test]
    fn new_match_is_in_progress() {
        let game = new_match();
        assert_eq!(game.state(), MatchState::InProgress);
        assert!(game.winner().is_none());
        assert!(game.loser().is_none());
        assert_eq!(game.score(), (0, 0));
        assert_eq!(game.rounds_played(), 0);
    }

    #[test]
    fn invalid_roster_is_rejected() {
        let result = Match::new(
            Roster::new("Alpha", ["a1"]),
            Roster::new("Empty", Vec::<String>::new()),
        );
        assert!(matches!(result, Err(MatchError::InvalidRoster(_))));
    }

    #[test]
    fn play_round_awards_and_revives() {
        let mut game = new_match();
        let controller = MatchController::new();

        let winner = controller
            .play_round(&mut game, &mut FixedRandom::new(0, true))
            .unwrap();

        assert_eq!(winner, Side::A);
        assert_eq!(game.score(), (1, 0));
        assert!(game
            .rosters()
            .iter()
            .all(|r| r.players().iter().all(|p| p.alive)));

        let record = &game.rounds()[0];
        assert_eq!(record.number, 1);
        assert_eq!(record.winner, Side::A);
        assert_eq!(record.score, (1, 0));
        assert_eq!(record.kills.len(), 2);
    }

    #[test]
    fn play_round_after_win_fails() {
        let mut game = new_match();
        let controller = MatchController::with_rules(FirstTo::new(1));
        let mut rng = FixedRandom::new(0, false);

        controller.play_round(&mut game, &mut rng).unwrap();
        assert_eq!(game.state(), MatchState::Won { winner: Side::B });
        assert_eq!(game.winner().map(|r| r.name.as_str()), Some("Bravo"));
        assert_eq!(game.loser().map(|r| r.name.as_str()), Some("Alpha"));

        let again = controller.play_round(&mut game, &mut rng);
        assert!(matches!(again, Err(MatchError::AlreadyOver)));
        assert_eq!(game.score(), (0, 1));
    }

    #[test]
    fn round_limit_stops_simulation() {
        let controller = MatchController::new().with_round_limit(5);
        let result = controller.simulate(new_match(), &mut RngSource::seeded(4), &mut NoopReporter);
        assert!(matches!(
            result,
            Err(MatchError::RoundLimitExceeded { limit: 5 })
        ));
    }

    #[test]
    fn round_limit_allows_decided_match() {
        let controller = MatchController::new().with_round_limit(16);
        let game = controller
            .simulate(new_match(), &mut FixedRandom::new(0, true), &mut NoopReporter)
            .unwrap();
        assert_eq!(game.score(), (16, 0));
    }

    #[test]
    fn player_lookup_by_ref() {
        let game = new_match();
        assert_eq!(game.player(PlayerRef::new(Side::B, 1)).name, "b2");
    }
}
