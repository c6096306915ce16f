//! Lexer for the stress/weight notation.
//!
//! Raw tokenization uses the logos lexer; the token stream is then assembled
//! into a [`Word`] by a single left-to-right pass. The notation:
//!
//!     'HLL      stressed heavy, light, light
//!     ('HL)L    a trochaic foot over the first two syllables
//!
//! A stress marker applies to the weight letter immediately following it and
//! is not a syllable of its own. Foot brackets are accepted on input so that
//! every rendered parse reads back to the same parse; brackets must be
//! balanced, non-empty, and unnested.
//!
//! Malformed input never produces a malformed [`Word`]: every defect is
//! reported as an [`InputError`] carrying the byte offset of the offending
//! character.

use crate::syllable::{Syllable, Weight, Word};
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Upper bound on syllables per word.
///
/// Ranking compares raw violation vectors and has no width limit; the cap
/// only keeps the tableau's numeric score rendering inside a `u64`.
pub const MAX_WORD_LEN: usize = 64;

/// All tokens of the scansion notation.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("'")]
    Stress,

    #[token("L")]
    Light,

    #[token("H")]
    Heavy,

    #[token("(")]
    OpenFoot,

    #[token(")")]
    CloseFoot,
}

/// Errors raised while reading the notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A character outside the notation alphabet.
    UnexpectedCharacter { character: char, position: usize },
    /// A stress marker not immediately followed by a weight letter.
    DanglingStress { position: usize },
    /// A foot opened while the previous foot is still open.
    NestedFoot { position: usize },
    /// A foot closed with no open foot.
    UnmatchedClose { position: usize },
    /// A foot closed before containing any syllable.
    EmptyFoot { position: usize },
    /// Input ended with an open foot.
    UnclosedFoot,
    /// More syllables than [`MAX_WORD_LEN`].
    WordTooLong { length: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "Unexpected character '{}' at position {}: expected one of L, H, ', (, )",
                character, position
            ),
            InputError::DanglingStress { position } => write!(
                f,
                "Stress marker at position {} is not followed by a weight letter",
                position
            ),
            InputError::NestedFoot { position } => write!(
                f,
                "Foot opened at position {} before the previous foot was closed",
                position
            ),
            InputError::UnmatchedClose { position } => {
                write!(f, "Foot closed at position {} with no open foot", position)
            }
            InputError::EmptyFoot { position } => {
                write!(f, "Foot closed at position {} contains no syllables", position)
            }
            InputError::UnclosedFoot => write!(f, "Input ends with an unclosed foot"),
            InputError::WordTooLong { length } => write!(
                f,
                "Word has {} syllables, exceeding the supported maximum of {}",
                length, MAX_WORD_LEN
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Tokenize source text with location information.
///
/// Unknown characters abort tokenization rather than being skipped; the
/// assembler below relies on seeing every input character as a token.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, InputError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                return Err(InputError::UnexpectedCharacter {
                    character,
                    position: lexer.span().start,
                });
            }
        }
    }

    Ok(tokens)
}

/// Parse a notation string into a [`Word`].
///
/// The result always satisfies the well-nesting invariant: brackets are
/// validated during assembly, so downstream components never see a
/// structurally broken parse from this entry point.
pub fn parse_word(source: &str) -> Result<Word, InputError> {
    let tokens = tokenize(source)?;

    let mut syllables: Vec<Syllable> = Vec::new();
    let mut pending_stress: Option<usize> = None;
    let mut pending_open: Option<usize> = None;
    let mut foot_open = false;

    for (token, span) in tokens {
        match token {
            Token::Stress => {
                if let Some(position) = pending_stress {
                    return Err(InputError::DanglingStress { position });
                }
                pending_stress = Some(span.start);
            }
            Token::Light | Token::Heavy => {
                let weight = match token {
                    Token::Light => Weight::Light,
                    _ => Weight::Heavy,
                };
                let mut syllable = Syllable::new(weight);
                syllable.stressed = pending_stress.take().is_some();
                if pending_open.take().is_some() {
                    syllable.opens_foot = true;
                    foot_open = true;
                }
                syllables.push(syllable);
            }
            Token::OpenFoot => {
                if let Some(position) = pending_stress {
                    return Err(InputError::DanglingStress { position });
                }
                if foot_open || pending_open.is_some() {
                    return Err(InputError::NestedFoot {
                        position: span.start,
                    });
                }
                pending_open = Some(span.start);
            }
            Token::CloseFoot => {
                if let Some(position) = pending_stress {
                    return Err(InputError::DanglingStress { position });
                }
                if pending_open.is_some() {
                    return Err(InputError::EmptyFoot {
                        position: span.start,
                    });
                }
                if !foot_open {
                    return Err(InputError::UnmatchedClose {
                        position: span.start,
                    });
                }
                match syllables.last_mut() {
                    Some(last) => last.closes_foot = true,
                    None => {
                        return Err(InputError::UnmatchedClose {
                            position: span.start,
                        })
                    }
                }
                foot_open = false;
            }
        }
    }

    if let Some(position) = pending_stress {
        return Err(InputError::DanglingStress { position });
    }
    if foot_open || pending_open.is_some() {
        return Err(InputError::UnclosedFoot);
    }
    if syllables.len() > MAX_WORD_LEN {
        return Err(InputError::WordTooLong {
            length: syllables.len(),
        });
    }

    Ok(Word::new(syllables))
}
