//! Error types shared across the engine
//!
//! Every rejected input maps to a distinguishable [`EngineError`] kind so
//! callers can branch on what went wrong instead of parsing messages.

use crate::core::MAX_WORD_LEN;
use thiserror::Error;

/// Recoverable validation and state errors from the solving engine
///
/// None of these indicate corruption: the session is left untouched when a
/// submit fails, and the caller may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Guess or feedback length does not match the session's word length
    #[error("expected {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Word contains characters outside `a-z` (after lowercasing)
    #[error("word '{0}' contains characters outside a-z")]
    InvalidCharacters(String),

    /// Word exceeds the longest supported length
    #[error("word '{0}' is longer than {MAX_WORD_LEN} letters")]
    UnsupportedLength(String),

    /// Guess is not in the allowed guess list
    #[error("word '{0}' is not in the allowed guess list")]
    UnknownWord(String),

    /// Feedback string missing or using characters other than `B`, `Y`, `G`
    #[error("feedback '{0}' is malformed: use B, Y, and G, one per letter")]
    MalformedFeedback(String),

    /// No word in the answer list is consistent with the supplied history
    #[error("no answer word is consistent with the supplied history")]
    ContradictoryHistory,

    /// The game already finished; no further guesses are accepted
    #[error("the game is already over")]
    SessionTerminal,
}

impl EngineError {
    /// Stable machine-readable tag for the JSON boundary
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "invalid_length",
            Self::InvalidCharacters(_) => "invalid_characters",
            Self::UnsupportedLength(_) => "unsupported_length",
            Self::UnknownWord(_) => "unknown_word",
            Self::MalformedFeedback(_) => "malformed_feedback",
            Self::ContradictoryHistory => "contradictory_history",
            Self::SessionTerminal => "session_terminal",
        }
    }
}

/// Errors from loading or assembling word lists
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list")]
    Io(#[from] std::io::Error),

    /// The answer list ended up empty after validation
    #[error("word list '{0}' contains no usable words")]
    Empty(String),

    /// Two words of different lengths made it into one lexicon
    #[error("word '{word}' is {actual} letters, but this lexicon uses {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let errors = [
            EngineError::InvalidLength {
                expected: 5,
                actual: 4,
            },
            EngineError::InvalidCharacters("cr4ne".into()),
            EngineError::UnsupportedLength("x".repeat(30)),
            EngineError::UnknownWord("zzzzz".into()),
            EngineError::MalformedFeedback("BYXGG".into()),
            EngineError::ContradictoryHistory,
            EngineError::SessionTerminal,
        ];

        let mut kinds: Vec<&str> = errors.iter().map(EngineError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = EngineError::UnknownWord("qwxzy".into());
        assert!(err.to_string().contains("qwxzy"));

        let err = EngineError::MalformedFeedback("BYXGG".into());
        assert!(err.to_string().contains("BYXGG"));
    }
}
