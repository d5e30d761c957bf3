//! Word representation
//!
//! A `Word` is a lowercase ASCII letter sequence of fixed length. The length
//! is not baked into the type: one deployment may solve 5-letter puzzles,
//! another 6-letter ones. Uniformity is enforced where words meet: the
//! lexicon at load time and the session on every submission.

use crate::error::EngineError;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Longest supported word length
///
/// Feedback patterns are base-3 encoded into a `u32`, which holds 3^20 - 1
/// but not 3^21 - 1.
pub const MAX_WORD_LEN: usize = 20;

/// A validated lowercase word
///
/// Construction normalizes case and rejects anything that is not purely
/// ASCII letters, so the rest of the engine can index bytes without
/// re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

impl Word {
    /// Parse a word from user input, normalizing to lowercase
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidCharacters`] for empty input or any
    /// character outside ASCII letters, and
    /// [`EngineError::UnsupportedLength`] beyond [`MAX_WORD_LEN`].
    ///
    /// # Examples
    /// ```
    /// use word_advisor::core::Word;
    ///
    /// let word = Word::parse("CrAnE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::parse("cr4ne").is_err());
    /// assert!(Word::parse("").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let lower = text.trim().to_ascii_lowercase();

        if lower.is_empty() || !lower.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(EngineError::InvalidCharacters(text.to_string()));
        }

        if lower.len() > MAX_WORD_LEN {
            return Err(EngineError::UnsupportedLength(lower));
        }

        Ok(Self {
            text: lower.into_boxed_str(),
        })
    }

    /// The word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The word as raw bytes (always ASCII lowercase letters)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Per-letter multiplicity table indexed by `letter - b'a'`
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &b in self.bytes() {
            counts[usize::from(b - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Word {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
