//! Candidate generation for one serial step.
//!
//! A step's candidate set is every way of inserting one new foot of one or
//! two syllables into the base parse, crossed with every stress pattern
//! that puts at least one stress inside the new foot, plus the unmodified
//! base itself. Every candidate is an independent clone of the base and is
//! scored against the ranked constraints the moment it is built.
//!
//! Generation order is part of the contract: spans enumerate left bound
//! first, then right bound, then stress mask, and the base is appended
//! last. The ranker's sort is stable, so candidates whose score tuples tie
//! exactly keep this order: the earliest-generated candidate wins, and the
//! no-op base never beats a tied insertion.

use crate::constraint::ConstraintKind;
use crate::foot::{foot_spans, StructuralError};
use crate::syllable::Word;
use crate::violation::ScoreTuple;
use serde::Serialize;

/// One scored parse. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    #[serde(rename = "parse")]
    pub word: Word,
    pub scores: ScoreTuple,
}

/// Evaluate every ranked constraint over a word.
pub fn score_word(
    word: &Word,
    ranking: &[ConstraintKind],
) -> Result<ScoreTuple, StructuralError> {
    let mut scores = Vec::with_capacity(ranking.len());
    for constraint in ranking {
        scores.push(constraint.evaluate(word)?);
    }
    Ok(ScoreTuple::new(scores))
}

/// Generate and score the full candidate set for one serial step.
///
/// A span is skipped when it overlaps any existing foot. On parses the
/// generator itself produces (all feet of one or two syllables) this is
/// exactly the endpoint-boundary-flag test; on annotated input carrying an
/// oversized foot it also keeps a new foot from nesting inside it, which
/// the flags alone would not catch.
pub fn generate(
    base: &Word,
    ranking: &[ConstraintKind],
) -> Result<Vec<Candidate>, StructuralError> {
    let len = base.len();

    let mut covered = vec![false; len];
    for foot in foot_spans(base)? {
        for index in foot.start..=foot.end {
            covered[index] = true;
        }
    }

    let mut candidates = Vec::new();
    for left in 0..len {
        for right in left..len.min(left + 2) {
            if covered[left..=right].iter().any(|&inside| inside) {
                continue;
            }

            let mut footed = base.clone();
            footed.syllables_mut()[left].opens_foot = true;
            footed.syllables_mut()[right].closes_foot = true;

            let size = right - left + 1;
            for mask in 1u32..(1 << size) {
                let mut word = footed.clone();
                for offset in 0..size {
                    word.syllables_mut()[left + offset].stressed = mask & (1 << offset) != 0;
                }
                let scores = score_word(&word, ranking)?;
                candidates.push(Candidate { word, scores });
            }
        }
    }

    // The unchanged base is always a candidate; it is what lets the serial
    // driver reach a fixed point.
    let scores = score_word(base, ranking)?;
    candidates.push(Candidate {
        word: base.clone(),
        scores,
    });

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::DEFAULT_RANKING;
    use crate::testing::word;

    fn renders(candidates: &[Candidate]) -> Vec<String> {
        candidates
            .iter()
            .map(|candidate| candidate.word.render())
            .collect()
    }

    #[test]
    fn test_candidate_count_for_two_syllables() {
        // Two size-1 spans with one mask each, one size-2 span with three
        // masks, plus the base.
        let candidates = generate(&word("HL"), &DEFAULT_RANKING).unwrap();
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn test_generation_order_and_base_last() {
        let candidates = generate(&word("HL"), &DEFAULT_RANKING).unwrap();
        assert_eq!(
            renders(&candidates),
            vec!["('H)L", "('HL)", "(H'L)", "('H'L)", "H('L)", "HL"]
        );
    }

    #[test]
    fn test_empty_word_yields_only_the_base() {
        let candidates = generate(&word(""), &DEFAULT_RANKING).unwrap();
        assert_eq!(renders(&candidates), vec![""]);
    }

    #[test]
    fn test_existing_feet_block_overlapping_spans() {
        let candidates = generate(&word("('HL)"), &DEFAULT_RANKING).unwrap();
        assert_eq!(renders(&candidates), vec!["('HL)"]);
    }

    #[test]
    fn test_oversized_foot_blocks_interior_spans() {
        // The middle syllable carries no boundary flag, but a foot inside
        // an existing foot would break well-nesting.
        let candidates = generate(&word("('HLL)"), &DEFAULT_RANKING).unwrap();
        assert_eq!(renders(&candidates), vec!["('HLL)"]);
    }

    #[test]
    fn test_stress_outside_the_new_foot_is_preserved() {
        let candidates = generate(&word("'HL"), &DEFAULT_RANKING).unwrap();
        assert!(renders(&candidates).contains(&"'H('L)".to_string()));
    }

    #[test]
    fn test_stress_inside_the_new_foot_is_overwritten() {
        // The mask clears pre-existing stress on foot syllables it leaves
        // unstressed.
        let candidates = generate(&word("'HL"), &DEFAULT_RANKING).unwrap();
        assert!(renders(&candidates).contains(&"(H'L)".to_string()));
    }

    #[test]
    fn test_candidates_around_an_existing_foot() {
        let candidates = generate(&word("('HL)L"), &DEFAULT_RANKING).unwrap();
        assert_eq!(renders(&candidates), vec!["('HL)('L)", "('HL)L"]);
    }

    #[test]
    fn test_scores_are_attached_per_ranked_constraint() {
        let candidates = generate(&word("HL"), &DEFAULT_RANKING).unwrap();
        for candidate in &candidates {
            assert_eq!(candidate.scores.len(), DEFAULT_RANKING.len());
            for vector in candidate.scores.violations() {
                assert_eq!(vector.len(), 2);
            }
        }
    }
}
