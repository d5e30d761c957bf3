//! Guess records
//!
//! One accepted guess plus the feedback it earned. A game history is a
//! slice of these; each record constrains the candidate set independently,
//! so filtering is insensitive to record order.

use super::feedback::Feedback;
use super::word::Word;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// A guess and the feedback it produced, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessRecord {
    /// Pair a guess with feedback, enforcing that their lengths agree
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidLength`] when the feedback arity does
    /// not match the guess.
    pub fn new(guess: Word, feedback: Feedback) -> Result<Self, EngineError> {
        if guess.len() != feedback.len() {
            return Err(EngineError::InvalidLength {
                expected: guess.len(),
                actual: feedback.len(),
            });
        }
        Ok(Self { guess, feedback })
    }

    /// Record a guess scored against a known secret
    #[must_use]
    pub fn scored(guess: Word, secret: &Word) -> Self {
        let feedback = Feedback::score(&guess, secret);
        Self { guess, feedback }
    }
}
