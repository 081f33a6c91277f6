//! Plain-text match reports.

use match_core::{Roster, SortKey};
use match_engine::ResultReporter;
use std::io::{self, Write};

/// Writes a human-readable summary of each decided match.
///
/// The output names the winner, the round score, and then both rosters
/// (winner first) with players ranked by the configured [`SortKey`]:
///
/// ```text
/// FaZe won the game!
/// FaZe won 16 rounds, G2 won 11 rounds
/// FaZe (16):
///     ropz (FaZe): 24 kills, 15 deaths, 6 assists
///     ...
/// ```
#[derive(Debug)]
pub struct TextReporter<W> {
    out: W,
    sort: SortKey,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, sort: SortKey) -> Self {
        TextReporter { out, sort }
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultReporter for TextReporter<W> {
    fn report(&mut self, winner: &Roster, loser: &Roster) -> io::Result<()> {
        writeln!(self.out, "{} won the game!", winner.name)?;
        writeln!(
            self.out,
            "{} won {} rounds, {} won {} rounds",
            winner.name,
            winner.rounds_won(),
            loser.name,
            loser.rounds_won()
        )?;
        write_roster(&mut self.out, winner, self.sort)?;
        write_roster(&mut self.out, loser, self.sort)?;
        self.out.flush()
    }
}

/// Writes one roster block: a `Team (rounds):` header and one tab-indented
/// line per player in `sort` order.
pub fn write_roster<W: Write + ?Sized>(out: &mut W, roster: &Roster, sort: SortKey) -> io::Result<()> {
    writeln!(out, "{} ({}):", roster.name, roster.rounds_won())?;
    for player in roster.ranked(sort) {
        writeln!(out, "\t{}", player)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_rosters() -> (Roster, Roster) {
        let mut winner = Roster::new("FaZe", ["rain", "ropz"]);
        let mut loser = Roster::new("G2", ["NiKo", "m0NESY"]);
        for _ in 0..16 {
            winner.award_round();
        }
        for _ in 0..11 {
            loser.award_round();
        }

        let faze = winner.players_mut();
        faze[0].kills = 10;
        faze[0].deaths = 14;
        faze[0].assists = 3;
        faze[1].kills = 21;
        faze[1].deaths = 9;
        faze[1].assists = 6;

        let g2 = loser.players_mut();
        g2[0].kills = 12;
        g2[0].deaths = 16;
        g2[1].kills = 11;
        g2[1].deaths = 15;
        g2[1].assists = 4;

        (winner, loser)
    }

    fn render(sort: SortKey) -> String {
        let (winner, loser) = finished_rosters();
        let mut reporter = TextReporter::new(Vec::new(), sort);
        reporter.report(&winner, &loser).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn report_ranked_by_kills() {
        let expected = "\
FaZe won the game!
FaZe won 16 rounds, G2 won 11 rounds
FaZe (16):
\tropz (FaZe): 21 kills, 9 deaths, 6 assists
\train (FaZe): 10 kills, 14 deaths, 3 assists
G2 (11):
\tNiKo (G2): 12 kills, 16 deaths, 0 assists
\tm0NESY (G2): 11 kills, 15 deaths, 4 assists
";
        assert_eq!(render(SortKey::Kills), expected);
    }

    #[test]
    fn report_ranked_by_assists() {
        let out = render(SortKey::Assists);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[3].starts_with("\tropz"));
        assert!(lines[6].starts_with("\tm0NESY"));
    }

    #[test]
    fn report_ranked_by_name() {
        let out = render(SortKey::Name);
        let lines: Vec<&str> = out.lines().collect();
        // Byte order: uppercase sorts before lowercase.
        assert!(lines[6].starts_with("\tNiKo"));
        assert!(lines[7].starts_with("\tm0NESY"));
        assert!(lines[3].starts_with("\train"));
    }

    #[test]
    fn report_is_deterministic() {
        assert_eq!(render(SortKey::Deaths), render(SortKey::Deaths));
    }

    #[test]
    fn write_roster_block() {
        let roster = Roster::new("Solo", ["one"]);
        let mut out = Vec::new();
        write_roster(&mut out, &roster, SortKey::Alive).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Solo (0):\n\tone (Solo): 0 kills, 0 deaths, 0 assists\n"
        );
    }
}
