//! Session state machine
//!
//! One [`Session`] tracks one game: its mode, accepted guesses, and whether
//! it has finished. The mode is a tagged variant decided at creation, so
//! submit logic dispatches once instead of string-matching per call. The
//! session owns its history exclusively; callers serialize submissions
//! (single writer), and everything else the engine does is derived from
//! that history on demand.

use crate::core::{Feedback, GuessRecord, Word};
use crate::engine::filter;
use crate::error::EngineError;
use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};

/// Standard guess budget
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// How a session learns the feedback for each guess
#[derive(Debug, Clone)]
pub enum SessionMode {
    /// Engine picked a random secret and scores guesses itself
    Auto { secret: Word },
    /// Caller told the engine the secret; guesses scored against it
    ManualAnswer { secret: Word },
    /// The real game is elsewhere; the caller relays its feedback
    ManualFeedback,
}

impl SessionMode {
    fn secret(&self) -> Option<&Word> {
        match self {
            Self::Auto { secret } | Self::ManualAnswer { secret } => Some(secret),
            Self::ManualFeedback => None,
        }
    }

    /// Guess-list membership is enforced only when the engine owns the game;
    /// an external game may use an allowed list we have no copy of
    const fn enforces_guess_list(&self) -> bool {
        !matches!(self, Self::ManualFeedback)
    }
}

/// Game progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// What one accepted submission produced
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub record: GuessRecord,
    pub win: bool,
    pub done: bool,
}

/// A single game in progress
pub struct Session<'a> {
    lexicon: &'a Lexicon,
    mode: SessionMode,
    history: Vec<GuessRecord>,
    status: Status,
    max_guesses: usize,
}

impl<'a> Session<'a> {
    /// Start an auto-mode game with a random secret from the answer list
    #[must_use]
    pub fn auto(lexicon: &'a Lexicon) -> Self {
        let secret = lexicon.random_answer().clone();
        log::debug!("auto session started, secret '{secret}'");
        Self::with_mode(lexicon, SessionMode::Auto { secret })
    }

    /// Start a game whose secret the caller already knows
    ///
    /// The secret must match the lexicon's word length but need not be on
    /// the answer list; an off-list secret legitimately drives the
    /// candidate set empty.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidCharacters`] or
    /// [`EngineError::InvalidLength`] for an unusable secret.
    pub fn with_answer(lexicon: &'a Lexicon, answer: &str) -> Result<Self, EngineError> {
        let secret = Word::parse(answer)?;
        if secret.len() != lexicon.word_len() {
            return Err(EngineError::InvalidLength {
                expected: lexicon.word_len(),
                actual: secret.len(),
            });
        }
        if !lexicon.is_allowed_guess(secret.text()) {
            log::warn!("secret '{secret}' is not in the allowed list; candidates may empty out");
        }
        Ok(Self::with_mode(lexicon, SessionMode::ManualAnswer { secret }))
    }

    /// Start a session that only relays feedback from an external game
    #[must_use]
    pub fn manual_feedback(lexicon: &'a Lexicon) -> Self {
        Self::with_mode(lexicon, SessionMode::ManualFeedback)
    }

    fn with_mode(lexicon: &'a Lexicon, mode: SessionMode) -> Self {
        Self {
            lexicon,
            mode,
            history: Vec::new(),
            status: Status::InProgress,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    /// Override the guess budget (builder style)
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses.max(1);
        self
    }

    /// Submit a guess, with feedback when (and only when) the session is in
    /// manual-feedback mode
    ///
    /// Rejected submissions leave the session untouched. On acceptance the
    /// record is appended and the status advances: `Won` on all-Hit
    /// feedback, `Lost` when the guess budget is spent, `InProgress`
    /// otherwise.
    ///
    /// # Errors
    /// - [`EngineError::SessionTerminal`] after a win or loss
    /// - [`EngineError::InvalidLength`] / [`EngineError::InvalidCharacters`]
    ///   for an unusable guess or feedback arity mismatch
    /// - [`EngineError::UnknownWord`] when the mode enforces the guess list
    /// - [`EngineError::MalformedFeedback`] for missing or unparsable
    ///   feedback in manual-feedback mode
    pub fn submit(
        &mut self,
        guess: &str,
        feedback: Option<&str>,
    ) -> Result<SubmitOutcome, EngineError> {
        if self.status != Status::InProgress {
            return Err(EngineError::SessionTerminal);
        }

        let guess = Word::parse(guess)?;
        if guess.len() != self.lexicon.word_len() {
            return Err(EngineError::InvalidLength {
                expected: self.lexicon.word_len(),
                actual: guess.len(),
            });
        }

        if self.mode.enforces_guess_list() && !self.lexicon.is_allowed_guess(guess.text()) {
            return Err(EngineError::UnknownWord(guess.text().to_string()));
        }

        let record = match self.mode.secret() {
            Some(secret) => GuessRecord::scored(guess, secret),
            None => {
                let supplied = feedback
                    .ok_or_else(|| EngineError::MalformedFeedback("(missing)".to_string()))?;
                let feedback = Feedback::parse(supplied)?;
                if feedback.len() != self.lexicon.word_len() {
                    return Err(EngineError::InvalidLength {
                        expected: self.lexicon.word_len(),
                        actual: feedback.len(),
                    });
                }
                GuessRecord { guess, feedback }
            }
        };

        let win = record.feedback.is_win();
        self.history.push(record.clone());

        self.status = if win {
            Status::Won
        } else if self.history.len() >= self.max_guesses {
            Status::Lost
        } else {
            Status::InProgress
        };

        let done = self.status != Status::InProgress;
        log::debug!(
            "turn {}: guessed '{}' -> {} ({:?})",
            self.history.len(),
            record.guess,
            record.feedback,
            self.status
        );

        Ok(SubmitOutcome { record, win, done })
    }

    /// Remove the most recent record, reopening a finished game
    ///
    /// Interactive callers use this to back out a mistyped feedback row.
    pub fn undo(&mut self) -> Option<GuessRecord> {
        let record = self.history.pop()?;
        self.status = Status::InProgress;
        Some(record)
    }

    /// Accepted guesses so far, in order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Word length for this game
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.lexicon.word_len()
    }

    /// The secret, for modes that know it
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.mode.secret()
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Answer words still consistent with the history, recomputed per call
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        filter::filter_all(self.lexicon.answers(), &self.history)
    }
}
