//! Word lists
//!
//! A [`Lexicon`] owns two immutable lists fixed at load time: the answer
//! set (words eligible to be the secret) and the guess set (words accepted
//! as guesses, the union of the answers and any extra guess-only words).
//! It is loaded once, shared by reference across sessions, and never
//! mutated afterwards, so concurrent readers need no locking.

pub mod loader;

use crate::core::Word;
use crate::error::LexiconError;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

const BUILTIN_ANSWERS: &str = include_str!("../../data/answers.txt");
const BUILTIN_EXTRA_GUESSES: &str = include_str!("../../data/allowed_extra.txt");

/// Immutable answer and guess lists of one uniform word length
#[derive(Debug, Clone)]
pub struct Lexicon {
    word_len: usize,
    answers: Vec<Word>,
    guesses: Vec<Word>,
    guess_texts: FxHashSet<String>,
}

impl Lexicon {
    /// Assemble a lexicon from an answer list and extra guess-only words
    ///
    /// Duplicates are dropped (first occurrence wins) and the guess set is
    /// the answers followed by the extras.
    ///
    /// # Errors
    /// Returns [`LexiconError::Empty`] for an empty answer list and
    /// [`LexiconError::MixedLengths`] when any word disagrees with the
    /// length of the first answer.
    pub fn new(answers: Vec<Word>, extra_guesses: Vec<Word>) -> Result<Self, LexiconError> {
        let answers = dedup(answers);

        let word_len = answers
            .first()
            .ok_or_else(|| LexiconError::Empty("answers".to_string()))?
            .len();

        for word in answers.iter().chain(extra_guesses.iter()) {
            if word.len() != word_len {
                return Err(LexiconError::MixedLengths {
                    word: word.text().to_string(),
                    expected: word_len,
                    actual: word.len(),
                });
            }
        }

        let mut guesses = answers.clone();
        guesses.extend(extra_guesses);
        let guesses = dedup(guesses);

        let guess_texts = guesses.iter().map(|w| w.text().to_string()).collect();

        log::debug!(
            "lexicon ready: {} answers, {} allowed guesses, length {}",
            answers.len(),
            guesses.len(),
            word_len
        );

        Ok(Self {
            word_len,
            answers,
            guesses,
            guess_texts,
        })
    }

    /// The built-in 5-letter lists compiled into the binary
    ///
    /// # Errors
    /// Propagates validation errors from [`Lexicon::new`]; with intact
    /// embedded data this cannot fail.
    pub fn builtin() -> Result<Self, LexiconError> {
        let answers = loader::parse_word_lines(BUILTIN_ANSWERS, "builtin answers");
        let extras = loader::parse_word_lines(BUILTIN_EXTRA_GUESSES, "builtin allowed extras");
        Self::new(answers, extras)
    }

    /// Uniform word length shared by both lists
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Words eligible to be the secret
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Words accepted as guesses (superset of the answers)
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Whether `text` (already lowercase) is an accepted guess
    #[must_use]
    pub fn is_allowed_guess(&self, text: &str) -> bool {
        self.guess_texts.contains(text)
    }

    /// Uniformly random answer word, for auto-mode secrets
    #[must_use]
    pub fn random_answer(&self) -> &Word {
        self.answers
            .choose(&mut rand::rng())
            .expect("lexicon construction guarantees a non-empty answer list")
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.text().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::parse(t).unwrap()).collect()
    }

    #[test]
    fn guesses_are_answers_plus_extras() {
        let lexicon = Lexicon::new(words(&["crane", "slate"]), words(&["tares"])).unwrap();

        assert_eq!(lexicon.word_len(), 5);
        assert_eq!(lexicon.answers().len(), 2);
        assert_eq!(lexicon.guesses().len(), 3);
        assert!(lexicon.is_allowed_guess("crane"));
        assert!(lexicon.is_allowed_guess("tares"));
        assert!(!lexicon.is_allowed_guess("zzzzz"));
    }

    #[test]
    fn duplicates_are_dropped() {
        let lexicon = Lexicon::new(
            words(&["crane", "crane", "slate"]),
            words(&["slate", "tares", "tares"]),
        )
        .unwrap();

        assert_eq!(lexicon.answers().len(), 2);
        assert_eq!(lexicon.guesses().len(), 3);
    }

    #[test]
    fn empty_answers_rejected() {
        let result = Lexicon::new(vec![], words(&["tares"]));
        assert!(matches!(result, Err(LexiconError::Empty(_))));
    }

    #[test]
    fn mixed_lengths_rejected() {
        let result = Lexicon::new(words(&["crane", "cat"]), vec![]);
        assert!(matches!(result, Err(LexiconError::MixedLengths { .. })));

        let result = Lexicon::new(words(&["crane"]), words(&["planet"]));
        assert!(matches!(result, Err(LexiconError::MixedLengths { .. })));
    }

    #[test]
    fn other_word_lengths_supported() {
        let lexicon = Lexicon::new(words(&["planet", "stable", "orange"]), vec![]).unwrap();
        assert_eq!(lexicon.word_len(), 6);
    }

    #[test]
    fn random_answer_comes_from_answer_list() {
        let lexicon = Lexicon::new(words(&["crane", "slate", "irate"]), vec![]).unwrap();
        for _ in 0..20 {
            let answer = lexicon.random_answer();
            assert!(lexicon.answers().contains(answer));
        }
    }

    #[test]
    fn builtin_lists_are_valid() {
        let lexicon = Lexicon::builtin().unwrap();

        assert_eq!(lexicon.word_len(), 5);
        assert!(lexicon.answers().len() >= 200);
        assert!(lexicon.guesses().len() > lexicon.answers().len());

        for word in lexicon.answers() {
            assert!(lexicon.is_allowed_guess(word.text()));
        }
    }
}
