//! # scansion-parser
//!
//! A serial Optimality Theory engine for metrical stress.
//!
//! Words are sequences of light (`L`) and heavy (`H`) syllables annotated
//! with stress (`'`) and foot brackets. Each derivation step enumerates
//! every way of inserting one new foot of one or two syllables, scores
//! every candidate against a strictly ranked constraint suite (Trochee,
//! ParseLeft, Iamb, ParseRight by default), and keeps the lexicographically
//! best candidate; the winner feeds the next step until the parse stops
//! changing.
//!
//! The pipeline, leaf to root:
//!
//!     notation -> lexing -> Word -> candidates -> constraint -> tableau -> derivation
//!
//! The library never prints; tableaus and outcomes render through `Display`
//! and serde, and the CLI decides what to do with them.

pub mod candidates;
pub mod constraint;
pub mod derivation;
pub mod foot;
pub mod formatting;
pub mod lexing;
pub mod syllable;
pub mod tableau;
pub mod testing;
pub mod violation;

pub use candidates::Candidate;
pub use constraint::{parse_ranking, ConstraintKind, RankingError, DEFAULT_RANKING};
pub use derivation::{Derivation, DerivationError, DerivationOutcome, DEFAULT_MAX_STEPS};
pub use foot::{foot_spans, Foot, StructuralError};
pub use lexing::{parse_word, InputError, MAX_WORD_LEN};
pub use syllable::{Syllable, Weight, Word};
pub use tableau::{rank, Tableau};
pub use violation::{ScoreTuple, ViolationVector};
