//! Foot location.
//!
//! Scans a word and extracts its bracketed spans. Matching is LIFO over
//! pending left boundaries, so for well-nested words (the invariant all
//! parsed and generated words satisfy) every right boundary closes the most
//! recently opened foot. Structural violations are reported as errors, never
//! papered over with sentinel indices.

use crate::syllable::Word;
use std::fmt;

/// A bracketed span, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foot {
    pub start: usize,
    pub end: usize,
}

impl Foot {
    /// Number of syllables in the foot.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Violations of the well-nesting invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    /// A right boundary with no unmatched left boundary before it.
    UnmatchedRightBoundary { index: usize },
    /// A left boundary that is never closed.
    UnclosedLeftBoundary { index: usize },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::UnmatchedRightBoundary { index } => write!(
                f,
                "Right foot boundary at syllable {} has no matching left boundary",
                index
            ),
            StructuralError::UnclosedLeftBoundary { index } => write!(
                f,
                "Left foot boundary at syllable {} is never closed",
                index
            ),
        }
    }
}

impl std::error::Error for StructuralError {}

/// Locate every foot in the word, ordered by opening index.
pub fn foot_spans(word: &Word) -> Result<Vec<Foot>, StructuralError> {
    let mut feet = Vec::new();
    let mut pending: Vec<usize> = Vec::new();

    for (index, syllable) in word.iter().enumerate() {
        if syllable.opens_foot {
            pending.push(index);
        }
        if syllable.closes_foot {
            let start = pending
                .pop()
                .ok_or(StructuralError::UnmatchedRightBoundary { index })?;
            feet.push(Foot { start, end: index });
        }
    }

    if let Some(&index) = pending.first() {
        return Err(StructuralError::UnclosedLeftBoundary { index });
    }

    feet.sort_by_key(|foot| foot.start);
    Ok(feet)
}
