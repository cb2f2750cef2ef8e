//! Built-in vocabularies for the cricket question corpus the tool ships
//! against. Order matters: it is the tie-break for ranked tables and the
//! node ordering of the network output.

use crate::error::AnalysisError;
use crate::vocab::{MatchMode, Vocabulary};

/// Teams scanned for the co-occurrence network (substring matching).
pub const TEAMS: &[&str] = &[
    "India",
    "England",
    "Australia",
    "Pakistan",
    "South Africa",
    "West Indies",
    "New Zealand",
    "Sri Lanka",
    "Bangladesh",
    "Zimbabwe",
    "Afghanistan",
    "Ireland",
    "Netherlands",
    "Scotland",
    "Canada",
];

/// Players ranked by mention (substring matching, presence per record).
pub const PLAYERS: &[&str] = &[
    "Sachin Tendulkar",
    "Virat Kohli",
    "MS Dhoni",
    "Rohit Sharma",
    "Steve Smith",
    "David Warner",
    "Joe Root",
    "Ben Stokes",
    "Kane Williamson",
    "Babar Azam",
    "AB de Villiers",
    "Chris Gayle",
    "Brian Lara",
    "Ricky Ponting",
    "Shane Warne",
    "Glenn McGrath",
    "James Anderson",
    "Jasprit Bumrah",
    "Mitchell Starc",
    "Pat Cummins",
    "Muttiah Muralitharan",
    "Lasith Malinga",
    "Jacques Kallis",
    "Yuvraj Singh",
    "Kapil Dev",
    "Anil Kumble",
    "Sunil Gavaskar",
    "Rahul Dravid",
    "Sourav Ganguly",
    "Adam Gilchrist",
    "Michael Clarke",
    "Dale Steyn",
    "Trent Boult",
    "Faf du Plessis",
    "Shakib Al Hasan",
    "Tamim Iqbal",
    "Shahid Afridi",
];

/// Domain terms ranked by total whole-word occurrences.
pub const TERMS: &[&str] = &[
    "bat",
    "ball",
    "wicket",
    "run",
    "over",
    "bowl",
    "catch",
    "stump",
    "innings",
    "bowling",
    "century",
    "fifty",
    "six",
    "four",
    "boundary",
    "spinner",
    "fast bowler",
    "test",
    "odi",
    "t20",
    "match",
    "series",
    "tournament",
    "world cup",
    "umpire",
    "pitch",
    "field",
    "sixer",
    "bowler",
    "batsman",
    "all-rounder",
    "duck",
    "maiden",
    "run rate",
    "strike rate",
    "powerplay",
    "super over",
    "no ball",
    "wide ball",
    "leg bye",
    "byes",
    "LBW",
    "googly",
    "yorker",
    "bouncer",
    "run out",
    "stumping",
    "cover drive",
    "pull shot",
    "sweep shot",
    "drive",
    "cut shot",
];

/// The three vocabularies one analysis run scans against.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    /// Entities for the co-occurrence network.
    pub network: Vocabulary,
    /// Entities for the presence-ranked mention table.
    pub mentions: Vocabulary,
    /// Terms for the occurrence-ranked table.
    pub terms: Vocabulary,
}

impl Vocabularies {
    /// The built-in cricket vocabularies.
    pub fn cricket() -> Result<Self, AnalysisError> {
        Ok(Self {
            network: Vocabulary::new(TEAMS.iter().copied(), MatchMode::Substring)?,
            mentions: Vocabulary::new(PLAYERS.iter().copied(), MatchMode::Substring)?,
            terms: Vocabulary::new(TERMS.iter().copied(), MatchMode::WholeWord)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_vocabularies_are_valid() {
        let v = Vocabularies::cricket().expect("built-in lists must validate");
        assert_eq!(v.network.len(), TEAMS.len());
        assert_eq!(v.mentions.len(), PLAYERS.len());
        assert_eq!(v.terms.len(), TERMS.len());
    }
}
