//! The constraint suite.
//!
//! Each constraint is a pure evaluation from a full word to a violation
//! vector; constraints never see sub-spans and never mutate their input.
//! The suite is a closed sum type, [`ConstraintKind`], with a single
//! `evaluate` capability: the ranking that drives candidate comparison is
//! an ordered list of kinds, configuration data rather than code structure,
//! so re-ranking the grammar requires no source change.

pub mod iamb;
pub mod parse;
pub mod trochee;

use crate::foot::StructuralError;
use crate::syllable::Word;
use crate::violation::ViolationVector;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four constraints of the metrical grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintKind {
    Trochee,
    ParseLeft,
    Iamb,
    ParseRight,
}

/// The default strict ranking, highest-ranked first.
pub const DEFAULT_RANKING: [ConstraintKind; 4] = [
    ConstraintKind::Trochee,
    ConstraintKind::ParseLeft,
    ConstraintKind::Iamb,
    ConstraintKind::ParseRight,
];

impl ConstraintKind {
    /// Display name used in tableau output.
    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::Trochee => "Trochee",
            ConstraintKind::ParseLeft => "ParseLeft",
            ConstraintKind::Iamb => "Iamb",
            ConstraintKind::ParseRight => "ParseRight",
        }
    }

    /// Identifier used in configuration files and on the command line.
    pub fn identifier(self) -> &'static str {
        match self {
            ConstraintKind::Trochee => "trochee",
            ConstraintKind::ParseLeft => "parse-left",
            ConstraintKind::Iamb => "iamb",
            ConstraintKind::ParseRight => "parse-right",
        }
    }

    /// Evaluate this constraint over a word.
    pub fn evaluate(self, word: &Word) -> Result<ViolationVector, StructuralError> {
        match self {
            ConstraintKind::Trochee => trochee::trochee(word),
            ConstraintKind::ParseLeft => Ok(parse::parse_left(word)),
            ConstraintKind::Iamb => iamb::iamb(word),
            ConstraintKind::ParseRight => Ok(parse::parse_right(word)),
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConstraintKind {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, RankingError> {
        match s {
            "trochee" => Ok(ConstraintKind::Trochee),
            "parse-left" => Ok(ConstraintKind::ParseLeft),
            "iamb" => Ok(ConstraintKind::Iamb),
            "parse-right" => Ok(ConstraintKind::ParseRight),
            _ => Err(RankingError::Unknown(s.to_string())),
        }
    }
}

/// Errors raised while resolving a configured ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// An identifier naming no known constraint.
    Unknown(String),
    /// The same constraint listed twice.
    Duplicate(ConstraintKind),
    /// An empty ranking.
    Empty,
}

impl fmt::Display for RankingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingError::Unknown(name) => write!(
                f,
                "Unknown constraint '{}': expected one of trochee, parse-left, iamb, parse-right",
                name
            ),
            RankingError::Duplicate(kind) => {
                write!(f, "Constraint '{}' appears more than once", kind.identifier())
            }
            RankingError::Empty => write!(f, "The constraint ranking is empty"),
        }
    }
}

impl std::error::Error for RankingError {}

/// Resolve a list of identifiers into a validated ranking.
pub fn parse_ranking<S: AsRef<str>>(names: &[S]) -> Result<Vec<ConstraintKind>, RankingError> {
    if names.is_empty() {
        return Err(RankingError::Empty);
    }

    let mut ranking = Vec::with_capacity(names.len());
    for name in names {
        let kind: ConstraintKind = name.as_ref().trim().parse()?;
        if ranking.contains(&kind) {
            return Err(RankingError::Duplicate(kind));
        }
        ranking.push(kind);
    }
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_round_trip() {
        for kind in DEFAULT_RANKING {
            assert_eq!(kind.identifier().parse::<ConstraintKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_ranking_default_order() {
        let ranking =
            parse_ranking(&["trochee", "parse-left", "iamb", "parse-right"]).unwrap();
        assert_eq!(ranking, DEFAULT_RANKING.to_vec());
    }

    #[test]
    fn test_parse_ranking_trims_whitespace() {
        let ranking = parse_ranking(&[" iamb ", "trochee"]).unwrap();
        assert_eq!(
            ranking,
            vec![ConstraintKind::Iamb, ConstraintKind::Trochee]
        );
    }

    #[test]
    fn test_parse_ranking_rejects_unknown_names() {
        assert_eq!(
            parse_ranking(&["trochee", "dactyl"]),
            Err(RankingError::Unknown("dactyl".to_string()))
        );
    }

    #[test]
    fn test_parse_ranking_rejects_duplicates() {
        assert_eq!(
            parse_ranking(&["iamb", "iamb"]),
            Err(RankingError::Duplicate(ConstraintKind::Iamb))
        );
    }

    #[test]
    fn test_parse_ranking_rejects_empty_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_ranking(&empty), Err(RankingError::Empty));
    }
}
