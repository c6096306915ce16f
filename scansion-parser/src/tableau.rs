//! Ranking candidates into a tableau.
//!
//! Candidates are sorted ascending by score tuple. Tuple comparison is
//! lexicographic over the ranked constraints, and each constraint's
//! violation vector compares with the leftmost syllable most significant,
//! so a higher-ranked constraint dominates absolutely and ties fall through
//! to the next constraint. The sort is stable: candidates tied on every
//! constraint keep generation order (see [`crate::candidates`]).

use crate::candidates::Candidate;
use crate::constraint::ConstraintKind;
use serde::Serialize;
use std::fmt;

/// The ranked candidate set of one serial step.
#[derive(Debug, Clone, Serialize)]
pub struct Tableau {
    #[serde(skip)]
    ranking: Vec<ConstraintKind>,
    candidates: Vec<Candidate>,
}

/// Sort a generation's candidates into a tableau.
///
/// The candidate list must be non-empty; the generator always includes the
/// unmodified base, so this holds for every generated set.
pub fn rank(mut candidates: Vec<Candidate>, ranking: &[ConstraintKind]) -> Tableau {
    debug_assert!(!candidates.is_empty());
    candidates.sort_by(|a, b| a.scores.cmp(&b.scores));
    Tableau {
        ranking: ranking.to_vec(),
        candidates,
    }
}

impl Tableau {
    /// The optimal candidate: first in sorted order.
    pub fn winner(&self) -> &Candidate {
        &self.candidates[0]
    }

    /// All candidates in sorted order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn ranking(&self) -> &[ConstraintKind] {
        &self.ranking
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, candidate) in self.candidates.iter().enumerate() {
            write!(f, "Option {}: {} | Scores: ", index + 1, candidate.word)?;
            let values = candidate.scores.values();
            for (position, (kind, value)) in self.ranking.iter().zip(values).enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", kind.name(), value)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Selected best candidate: {}", self.winner().word)?;
        writeln!(f, "====================================")
    }
}
