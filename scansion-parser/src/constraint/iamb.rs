//! Iamb: feet prefer final stress.

use crate::foot::{foot_spans, StructuralError};
use crate::syllable::{Weight, Word};
use crate::violation::ViolationVector;

/// Mark every syllable of every ill-formed iamb.
///
/// The mirror image of [`crate::constraint::trochee::trochee`]: a
/// two-syllable foot is a well-formed iamb only when its right syllable is
/// stressed and its left syllable is not. Oversized and single-light feet
/// are judged identically to the trochaic case.
pub fn iamb(word: &Word) -> Result<ViolationVector, StructuralError> {
    let mut violations = ViolationVector::clean(word.len());

    for foot in foot_spans(word)? {
        let violated = match foot.len() {
            1 => word[foot.start].weight == Weight::Light,
            2 => !word[foot.end].stressed || word[foot.start].stressed,
            _ => true,
        };
        if violated {
            violations.mark_span(foot.start, foot.end);
        }
    }

    Ok(violations)
}
