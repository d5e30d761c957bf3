//! Feedback patterns and the scoring oracle
//!
//! A pattern records, per position of a guess, whether the letter was in the
//! right place (`Hit`), elsewhere in the secret (`Present`), or absent
//! (`Miss`). Patterns are stored base-3 in a single `u32` (digit i carries
//! the mark for position i with weight 3^i) alongside the word length, so
//! patterns for different puzzle sizes never compare equal.
//!
//! The wire format is an L-character string over `{B, Y, G}` in position
//! order: `Miss` = B, `Present` = Y, `Hit` = G.

use super::word::{MAX_WORD_LEN, Word};
use crate::error::EngineError;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter absent from the secret (respecting multiplicity): `B`
    Miss,
    /// Letter present elsewhere in the secret: `Y`
    Present,
    /// Letter in the correct position: `G`
    Hit,
}

impl Mark {
    const fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Self::Miss,
            1 => Self::Present,
            _ => Self::Hit,
        }
    }

    /// Wire letter for this mark
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Miss => 'B',
            Self::Present => 'Y',
            Self::Hit => 'G',
        }
    }
}

const fn pow3(n: usize) -> u32 {
    let mut value = 1u32;
    let mut i = 0;
    while i < n {
        value *= 3;
        i += 1;
    }
    value
}

/// An ordered sequence of per-position marks for one guess
///
/// Compact (8 bytes), `Copy`, and hashable, which matters because the
/// distribution engine buckets many thousands of these per ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    code: u32,
    len: u8,
}

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Two passes. The first marks exact position matches as `Hit` and
    /// consumes them from a per-letter table seeded with the secret's letter
    /// multiset. The second walks the remaining positions left to right,
    /// marking `Present` while the table still has that letter and `Miss`
    /// otherwise. The left-to-right order is what credits a repeated guess
    /// letter at most as many times as the secret actually contains it,
    /// with earlier positions taking priority.
    ///
    /// Both words must have the same length; mismatched lengths are a
    /// caller bug, checked in debug builds only.
    ///
    /// # Examples
    /// ```
    /// use word_advisor::core::{Feedback, Word};
    ///
    /// let guess = Word::parse("trace").unwrap();
    /// let secret = Word::parse("crane").unwrap();
    /// assert_eq!(Feedback::score(&guess, &secret).to_string(), "BGGYG");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            secret.len(),
            "scored words must have equal length"
        );

        let g = guess.bytes();
        let s = secret.bytes();
        let len = g.len();

        let mut remaining = secret.letter_counts();
        let mut digits = [0u8; MAX_WORD_LEN];

        for i in 0..len {
            if g[i] == s[i] {
                digits[i] = 2;
                remaining[usize::from(g[i] - b'a')] -= 1;
            }
        }

        for i in 0..len {
            if digits[i] == 0 {
                let letter = usize::from(g[i] - b'a');
                if remaining[letter] > 0 {
                    digits[i] = 1;
                    remaining[letter] -= 1;
                }
            }
        }

        let mut code = 0u32;
        let mut multiplier = 1u32;
        for &digit in &digits[..len] {
            code += u32::from(digit) * multiplier;
            multiplier *= 3;
        }

        Self {
            code,
            len: len as u8,
        }
    }

    /// The all-`Hit` pattern for a given word length
    #[must_use]
    pub const fn all_hit(len: usize) -> Self {
        Self {
            code: pow3(len) - 1,
            len: len as u8,
        }
    }

    /// Whether every position is a `Hit`
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.code == pow3(self.len as usize) - 1
    }

    /// Number of marks (equals the guess length)
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Mark at a position (0-based)
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        assert!(position < self.len(), "mark position out of range");
        Mark::from_digit(self.code / pow3(position) % 3)
    }

    /// Marks in position order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        (0..self.len()).map(move |i| Mark::from_digit(self.code / pow3(i) % 3))
    }

    /// Count of `Hit` marks
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.marks().filter(|&m| m == Mark::Hit).count()
    }

    /// Count of `Present` marks
    #[must_use]
    pub fn count_presents(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Parse the `{B,Y,G}` wire string, case-insensitively
    ///
    /// # Errors
    /// Returns [`EngineError::MalformedFeedback`] for empty input, input
    /// longer than [`MAX_WORD_LEN`], or characters outside `{B, Y, G}`.
    ///
    /// # Examples
    /// ```
    /// use word_advisor::core::Feedback;
    ///
    /// let fb = Feedback::parse("bggyg").unwrap();
    /// assert_eq!(fb.to_string(), "BGGYG");
    /// assert!(Feedback::parse("BGXous").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let trimmed = s.trim();
        let malformed = || EngineError::MalformedFeedback(s.trim().to_string());

        if trimmed.is_empty() || trimmed.len() > MAX_WORD_LEN {
            return Err(malformed());
        }

        let mut code = 0u32;
        let mut multiplier = 1u32;
        let mut len = 0u8;

        for ch in trimmed.chars() {
            let digit = match ch {
                'B' | 'b' => 0,
                'Y' | 'y' => 1,
                'G' | 'g' => 2,
                _ => return Err(malformed()),
            };
            code += digit * multiplier;
            multiplier *= 3;
            len += 1;
        }

        Ok(Self { code, len })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Feedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Feedback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
