//! Trochee: feet prefer initial stress.

use crate::foot::{foot_spans, StructuralError};
use crate::syllable::{Weight, Word};
use crate::violation::ViolationVector;

/// Mark every syllable of every ill-formed trochee.
///
/// Feet of three or more syllables always violate. A two-syllable foot is a
/// well-formed trochee only when its left syllable is stressed and its right
/// syllable is not. A single-syllable foot violates when the syllable is
/// light: a lone light syllable cannot head a trochee.
pub fn trochee(word: &Word) -> Result<ViolationVector, StructuralError> {
    let mut violations = ViolationVector::clean(word.len());

    for foot in foot_spans(word)? {
        let violated = match foot.len() {
            1 => word[foot.start].weight == Weight::Light,
            2 => word[foot.end].stressed || !word[foot.start].stressed,
            _ => true,
        };
        if violated {
            violations.mark_span(foot.start, foot.end);
        }
    }

    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{violations, word};

    #[test]
    fn test_well_formed_trochee_is_clean() {
        assert_eq!(trochee(&word("('HL)")).unwrap(), violations("00"));
        assert_eq!(trochee(&word("('LL)H")).unwrap(), violations("000"));
    }

    #[test]
    fn test_stress_final_foot_violates() {
        assert_eq!(trochee(&word("(H'L)")).unwrap(), violations("11"));
    }

    #[test]
    fn test_double_stress_violates() {
        assert_eq!(trochee(&word("('H'L)")).unwrap(), violations("11"));
    }

    #[test]
    fn test_stressless_foot_violates() {
        assert_eq!(trochee(&word("(HL)")).unwrap(), violations("11"));
    }

    #[test]
    fn test_single_heavy_foot_is_clean() {
        assert_eq!(trochee(&word("('H)L")).unwrap(), violations("00"));
    }

    #[test]
    fn test_single_light_foot_violates() {
        assert_eq!(trochee(&word("('L)H")).unwrap(), violations("10"));
    }

    #[test]
    fn test_oversized_foot_marks_every_syllable() {
        assert_eq!(trochee(&word("('HLL)")).unwrap(), violations("111"));
    }

    #[test]
    fn test_unfooted_syllables_are_ignored() {
        assert_eq!(trochee(&word("HLL")).unwrap(), violations("000"));
        assert_eq!(trochee(&word("H('HL)")).unwrap(), violations("000"));
    }
}
