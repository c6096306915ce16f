//! The serial derivation driver.
//!
//! One step generates and ranks the candidate set of the current parse. If
//! the winner renders identically to the current parse the derivation has
//! converged; otherwise the winner becomes the next step's base. Only the
//! winner survives a step: the rest of the generation is kept solely as
//! that step's tableau in the outcome.
//!
//! Termination is provable for well-formed parses: any inserted foot covers
//! at least one previously unparsed syllable and so strictly lowers
//! ParseLeft against the base, meaning a tie with the base is impossible
//! and every non-trivial step adds a foot. Feet are never removed, so a
//! word of N syllables converges within N + 1 ranker passes. The
//! configurable `max_steps` cap still bounds the loop rather than trusting
//! the proof against hand-built or future inputs.

use crate::candidates::generate;
use crate::constraint::{ConstraintKind, DEFAULT_RANKING};
use crate::foot::StructuralError;
use crate::syllable::Word;
use crate::tableau::{rank, Tableau};
use serde::Serialize;
use std::fmt;

/// Default ceiling on ranker passes per derivation.
pub const DEFAULT_MAX_STEPS: usize = 64;

/// A configured serial derivation.
#[derive(Debug, Clone)]
pub struct Derivation {
    ranking: Vec<ConstraintKind>,
    max_steps: usize,
}

impl Derivation {
    /// A derivation under the given ranking, aborting after `max_steps`
    /// ranker passes without convergence.
    pub fn new(ranking: Vec<ConstraintKind>, max_steps: usize) -> Self {
        Self { ranking, max_steps }
    }

    pub fn ranking(&self) -> &[ConstraintKind] {
        &self.ranking
    }

    /// Drive the word to its fixed point.
    pub fn run(&self, word: Word) -> Result<DerivationOutcome, DerivationError> {
        let mut current = word;
        let mut steps: Vec<Tableau> = Vec::new();

        loop {
            if steps.len() == self.max_steps {
                return Err(DerivationError::StepLimitExceeded {
                    max_steps: self.max_steps,
                });
            }

            let tableau = rank(generate(&current, &self.ranking)?, &self.ranking);
            let winner = tableau.winner().word.clone();
            let converged = winner.render() == current.render();
            steps.push(tableau);

            if converged {
                return Ok(DerivationOutcome {
                    ranking: self.ranking.clone(),
                    steps,
                    final_word: current,
                });
            }
            current = winner;
        }
    }
}

impl Default for Derivation {
    fn default() -> Self {
        Self::new(DEFAULT_RANKING.to_vec(), DEFAULT_MAX_STEPS)
    }
}

/// A converged derivation: every step's tableau plus the terminal parse.
#[derive(Debug, Clone, Serialize)]
pub struct DerivationOutcome {
    ranking: Vec<ConstraintKind>,
    steps: Vec<Tableau>,
    #[serde(rename = "final")]
    final_word: Word,
}

impl DerivationOutcome {
    pub fn ranking(&self) -> &[ConstraintKind] {
        &self.ranking
    }

    pub fn steps(&self) -> &[Tableau] {
        &self.steps
    }

    pub fn final_word(&self) -> &Word {
        &self.final_word
    }
}

/// Failures that abort a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// The base parse violated the well-nesting invariant.
    Structural(StructuralError),
    /// No fixed point within the configured ceiling.
    StepLimitExceeded { max_steps: usize },
}

impl From<StructuralError> for DerivationError {
    fn from(error: StructuralError) -> Self {
        DerivationError::Structural(error)
    }
}

impl fmt::Display for DerivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivationError::Structural(error) => write!(f, "{}", error),
            DerivationError::StepLimitExceeded { max_steps } => {
                write!(f, "Derivation did not converge within {} steps", max_steps)
            }
        }
    }
}

impl std::error::Error for DerivationError {}
