//! Violation vectors and score tuples.
//!
//! A constraint marks each syllable of a word as violating (1) or clean (0).
//! Candidates are ranked by comparing these vectors directly: `Ord` on
//! [`ViolationVector`] is lexicographic with the leftmost syllable most
//! significant, which is exactly the ordering of the vectors reinterpreted
//! as base-2 integers, minus the integer's width limit. The numeric value
//! is still materialized for the tableau display, where
//! [`crate::lexing::MAX_WORD_LEN`] guarantees it fits a `u64`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Per-syllable violation marks for one constraint over one word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ViolationVector {
    marks: Vec<bool>,
}

impl ViolationVector {
    /// A vector of the given length with no violations.
    pub fn clean(len: usize) -> Self {
        Self {
            marks: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marks[index]
    }

    /// Mark a single syllable as violating.
    pub fn mark(&mut self, index: usize) {
        self.marks[index] = true;
    }

    /// Mark an inclusive span of syllables as violating.
    pub fn mark_span(&mut self, start: usize, end: usize) {
        for index in start..=end {
            self.marks[index] = true;
        }
    }

    /// The same marks read from the opposite edge of the word.
    pub fn reversed(mut self) -> Self {
        self.marks.reverse();
        self
    }

    /// The vector reinterpreted as a base-2 number, leftmost syllable most
    /// significant. Only used for display; ranking compares vectors.
    pub fn value(&self) -> u64 {
        debug_assert!(self.marks.len() <= 64);
        self.marks
            .iter()
            .fold(0u64, |value, &mark| (value << 1) | u64::from(mark))
    }
}

impl fmt::Display for ViolationVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One violation vector per ranked constraint, in ranking order.
///
/// `Ord` is standard tuple comparison: the first differing constraint
/// decides, so a higher-ranked constraint dominates absolutely.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoreTuple {
    scores: Vec<ViolationVector>,
}

impl ScoreTuple {
    pub fn new(scores: Vec<ViolationVector>) -> Self {
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn violations(&self) -> &[ViolationVector] {
        &self.scores
    }

    /// The display values, one per constraint in ranking order.
    pub fn values(&self) -> Vec<u64> {
        self.scores.iter().map(ViolationVector::value).collect()
    }
}

impl Serialize for ScoreTuple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.scores.iter().map(ViolationVector::value))
    }
}
