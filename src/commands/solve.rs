//! Automated solving of a stated target word

use crate::core::{Feedback, Word};
use crate::engine::{Strategy, score_guess, score_pool};
use crate::error::EngineError;
use crate::lexicon::Lexicon;
use crate::session::{DEFAULT_MAX_GUESSES, Session, Status};
use rustc_hash::FxHashSet;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub strategy: Strategy,
    pub first_guess: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
            strategy: Strategy::Entropy,
            first_guess: None,
        }
    }
}

/// One turn of the solution path
pub struct SolveStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Full solution path for one target
pub struct SolveReport {
    pub target: String,
    pub success: bool,
    pub steps: Vec<SolveStep>,
}

/// Drive a session against a known target, choosing guesses by strategy
///
/// # Errors
/// Returns validation errors for an unusable target, and
/// [`EngineError::ContradictoryHistory`] if the candidate set empties out
/// (possible when the target is not on the answer list).
pub fn solve_word(lexicon: &Lexicon, config: &SolveConfig) -> Result<SolveReport, EngineError> {
    let mut session =
        Session::with_answer(lexicon, &config.target)?.with_max_guesses(config.max_guesses);

    let mut steps: Vec<SolveStep> = Vec::new();

    while session.status() == Status::InProgress {
        let candidates = session.candidates();
        let candidates_before = candidates.len();
        let candidate_texts: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

        let guess_text = match (&config.first_guess, steps.is_empty()) {
            (Some(first), true) => first.clone(),
            _ => {
                let scores = score_pool(lexicon.guesses(), &candidates);
                config
                    .strategy
                    .choose(&scores, &candidate_texts)
                    .ok_or(EngineError::ContradictoryHistory)?
            }
        };

        let guess_word = Word::parse(&guess_text)?;
        let metrics = score_guess(&guess_word, &candidates);

        let outcome = session.submit(&guess_text, None)?;
        let candidates_after = session.candidates().len();

        steps.push(SolveStep {
            word: outcome.record.guess.text().to_string(),
            feedback: outcome.record.feedback,
            candidates_before,
            candidates_after,
            entropy: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
        });
    }

    Ok(SolveReport {
        target: config.target.trim().to_lowercase(),
        success: session.status() == Status::Won,
        steps,
    })
}
