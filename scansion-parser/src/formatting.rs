//! Rendering parses back to the notation.
//!
//! The renderer is the exact inverse of [`crate::lexing::parse_word`] for
//! well-formed words: `(` where a foot opens, `'` before a stressed weight
//! letter, `)` where a foot closes. Round-trip stability is what lets the
//! serial driver detect a fixed point by comparing rendered forms.

use crate::syllable::{Weight, Word};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::Write as _;

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for syllable in self.iter() {
            if syllable.opens_foot {
                f.write_char('(')?;
            }
            if syllable.stressed {
                f.write_char('\'')?;
            }
            f.write_char(syllable.weight.letter())?;
            if syllable.closes_foot {
                f.write_char(')')?;
            }
        }
        Ok(())
    }
}

impl Word {
    /// The notation string for this parse.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

// Words serialize as their rendered form; consumers of the JSON report want
// the notation, not the flag soup.
impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
