//! ParseLeft and ParseRight: syllables want to be footed.
//!
//! Both constraints mark exactly the unparsed syllables: those carrying no
//! boundary flag. They differ only in which word edge weighs heaviest in the
//! ranking: ParseRight reverses the vector end-to-end, so its positional
//! significance runs from the right edge instead of the left.

use crate::syllable::Word;
use crate::violation::ViolationVector;

/// Mark every unparsed syllable, scanned left to right.
pub fn parse_left(word: &Word) -> ViolationVector {
    let mut violations = ViolationVector::clean(word.len());
    for (index, syllable) in word.iter().enumerate() {
        if !syllable.is_parsed() {
            violations.mark(index);
        }
    }
    violations
}

/// [`parse_left`]'s marks read from the right edge of the word.
pub fn parse_right(word: &Word) -> ViolationVector {
    parse_left(word).reversed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{violations, word};

    #[test]
    fn test_fully_parsed_word_is_clean() {
        assert_eq!(parse_left(&word("('HL)")), violations("00"));
        assert_eq!(parse_right(&word("('HL)")), violations("00"));
    }

    #[test]
    fn test_unparsed_syllables_are_marked() {
        assert_eq!(parse_left(&word("('HL)L")), violations("001"));
        assert_eq!(parse_left(&word("H('L)L")), violations("101"));
    }

    #[test]
    fn test_parse_right_is_the_reverse_of_parse_left() {
        for notation in ["", "HLL", "('HL)L", "H('L)L", "LL('H)"] {
            let parse = word(notation);
            assert_eq!(parse_right(&parse), parse_left(&parse).reversed());
        }
    }

    #[test]
    fn test_positional_weight_flips_between_edges() {
        // Same unparsed count, opposite edges.
        assert_eq!(parse_left(&word("('HL)L")).value(), 1);
        assert_eq!(parse_right(&word("('HL)L")).value(), 4);
        assert_eq!(parse_left(&word("L('HL)")).value(), 4);
        assert_eq!(parse_right(&word("L('HL)")).value(), 1);
    }

    #[test]
    fn test_stress_does_not_affect_parsing_status() {
        assert_eq!(parse_left(&word("'HL")), violations("11"));
    }
}
