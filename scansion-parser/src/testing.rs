//! Test factories.
//!
//! Tests build words from the notation itself rather than assembling
//! syllable structs by hand: the notation is the verified way to state a
//! parse, and it keeps expected structures readable at the call site.
//! Structurally broken words (the ones the lexer refuses to produce) are
//! the exception and are built from raw syllables where needed.

use crate::lexing::parse_word;
use crate::syllable::Word;
use crate::violation::ViolationVector;

/// Build a word from notation, panicking on malformed input.
///
/// For tests only; library code goes through [`parse_word`] and handles the
/// error.
pub fn word(notation: &str) -> Word {
    parse_word(notation).expect("test notation must be well-formed")
}

/// Build a violation vector from a string of `0` and `1` marks.
pub fn violations(bits: &str) -> ViolationVector {
    let mut vector = ViolationVector::clean(bits.len());
    for (index, bit) in bits.chars().enumerate() {
        match bit {
            '0' => {}
            '1' => vector.mark(index),
            other => panic!("violation bits must be 0 or 1, got '{}'", other),
        }
    }
    vector
}
