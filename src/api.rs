//! Request/response contract for front ends
//!
//! Serde DTOs and thin handlers over the engine, shaped for an HTTP-ish
//! consumer: every call carries the full history (no hidden server-side
//! state), feedback travels as `{B,Y,G}` strings, and validation failures
//! come back as a structured error body instead of a panic. Transport is
//! somebody else's problem; these types only fix the JSON shapes.

use crate::core::{GuessRecord, Word};
use crate::engine::{self, FullOptions, RankConfig, Rankings, RemainingHistogram};
use crate::error::EngineError;
use crate::lexicon::Lexicon;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Session mode selector on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Auto,
    ManualAnswer,
    ManualFeedback,
}

/// Start a new game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    pub mode: Mode,
    /// Required for `manual-answer`, ignored otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    pub answer_length: usize,
}

/// Submit one guess to an existing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub guess: String,
    /// Required in manual-feedback mode, ignored otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub feedback: String,
    pub history: Vec<GuessRecord>,
    pub win: bool,
    pub done: bool,
}

/// Structured validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl From<&EngineError> for ErrorResponse {
    fn from(err: &EngineError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }
    }
}

/// Remaining-count histogram view for one guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainingDistributionResponse {
    pub guess: String,
    pub total_remaining: usize,
    pub expected_remaining: f64,
    /// remaining-count -> how many candidates would see that count
    pub distribution: BTreeMap<usize, usize>,
}

/// Pattern-bucket view for one guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCountsResponse {
    pub guess: String,
    pub total_remaining: usize,
    pub pattern_counts: BTreeMap<String, usize>,
}

/// Create a session for the requested mode
///
/// # Errors
/// Propagates secret validation failures in manual-answer mode (including
/// a missing `answer` field).
pub fn start_session<'a>(
    lexicon: &'a Lexicon,
    request: &StartRequest,
) -> Result<(Session<'a>, StartResponse), EngineError> {
    let session = match request.mode {
        Mode::Auto => Session::auto(lexicon),
        Mode::ManualAnswer => {
            Session::with_answer(lexicon, request.answer.as_deref().unwrap_or(""))?
        }
        Mode::ManualFeedback => Session::manual_feedback(lexicon),
    };

    Ok((
        session,
        StartResponse {
            answer_length: lexicon.word_len(),
        },
    ))
}

/// Submit a guess; the session is untouched on error
///
/// # Errors
/// Passes through every [`EngineError`] from [`Session::submit`].
pub fn submit_guess(
    session: &mut Session<'_>,
    request: &SubmitRequest,
) -> Result<SubmitResponse, EngineError> {
    let outcome = session.submit(&request.guess, request.feedback.as_deref())?;

    Ok(SubmitResponse {
        feedback: outcome.record.feedback.to_string(),
        history: session.history().to_vec(),
        win: outcome.win,
        done: outcome.done,
    })
}

fn validated_candidates<'a>(
    lexicon: &'a Lexicon,
    history: &[GuessRecord],
) -> Result<Vec<&'a Word>, EngineError> {
    for record in history {
        if record.guess.len() != lexicon.word_len() {
            return Err(EngineError::InvalidLength {
                expected: lexicon.word_len(),
                actual: record.guess.len(),
            });
        }
        if record.feedback.len() != lexicon.word_len() {
            return Err(EngineError::InvalidLength {
                expected: lexicon.word_len(),
                actual: record.feedback.len(),
            });
        }
    }

    Ok(engine::filter_all(lexicon.answers(), history))
}

/// Ranked best-option lists for a history
///
/// A contradicted history is a valid input: the response carries
/// `total_remaining == 0` and empty lists.
///
/// # Errors
/// Returns [`EngineError::InvalidLength`] when a history record does not
/// match the lexicon's word length.
pub fn best_options(
    lexicon: &Lexicon,
    history: &[GuessRecord],
    config: &RankConfig,
) -> Result<Rankings, EngineError> {
    let candidates = validated_candidates(lexicon, history)?;
    Ok(engine::rank(lexicon.guesses(), &candidates, config))
}

/// Unfiltered full score lists for a history
///
/// # Errors
/// Same validation as [`best_options`].
pub fn full_options(
    lexicon: &Lexicon,
    history: &[GuessRecord],
) -> Result<FullOptions, EngineError> {
    let candidates = validated_candidates(lexicon, history)?;
    Ok(engine::full_options(lexicon.guesses(), &candidates))
}

fn parse_guess(lexicon: &Lexicon, guess: &str) -> Result<Word, EngineError> {
    let word = Word::parse(guess)?;
    if word.len() != lexicon.word_len() {
        return Err(EngineError::InvalidLength {
            expected: lexicon.word_len(),
            actual: word.len(),
        });
    }
    Ok(word)
}

/// Remaining-count histogram for one guess against a history
///
/// # Errors
/// Validates the guess and history lengths like the other handlers.
pub fn remaining_distribution(
    lexicon: &Lexicon,
    guess: &str,
    history: &[GuessRecord],
) -> Result<RemainingDistributionResponse, EngineError> {
    let guess = parse_guess(lexicon, guess)?;
    let candidates = validated_candidates(lexicon, history)?;
    let histogram = RemainingHistogram::build(&guess, &candidates);

    Ok(RemainingDistributionResponse {
        guess: guess.text().to_string(),
        total_remaining: histogram.total,
        expected_remaining: histogram.expected_remaining,
        distribution: histogram.buckets,
    })
}

/// Pattern-bucket counts for one guess against a history
///
/// # Errors
/// Validates the guess and history lengths like the other handlers.
pub fn pattern_counts(
    lexicon: &Lexicon,
    guess: &str,
    history: &[GuessRecord],
) -> Result<PatternCountsResponse, EngineError> {
    let guess = parse_guess(lexicon, guess)?;
    let candidates = validated_candidates(lexicon, history)?;

    let counts = engine::pattern_counts(&guess, &candidates);
    let total_remaining = counts.values().sum();
    let pattern_counts = counts
        .into_iter()
        .map(|(pattern, count)| (pattern.to_string(), count))
        .collect();

    Ok(PatternCountsResponse {
        guess: guess.text().to_string(),
        total_remaining,
        pattern_counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn lexicon() -> Lexicon {
        let answers = ["crane", "slate", "irate", "arise", "grate"]
            .iter()
            .map(|t| Word::parse(t).unwrap())
            .collect();
        let extras = ["tares", "probe", "trace"]
            .iter()
            .map(|t| Word::parse(t).unwrap())
            .collect();
        Lexicon::new(answers, extras).unwrap()
    }

    fn record(guess: &str, feedback: &str) -> GuessRecord {
        GuessRecord::new(
            Word::parse(guess).unwrap(),
            Feedback::parse(feedback).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn mode_uses_kebab_case_tags() {
        assert_eq!(serde_json::to_string(&Mode::Auto).unwrap(), "\"auto\"");
        assert_eq!(
            serde_json::to_string(&Mode::ManualAnswer).unwrap(),
            "\"manual-answer\""
        );
        let mode: Mode = serde_json::from_str("\"manual-feedback\"").unwrap();
        assert_eq!(mode, Mode::ManualFeedback);
    }

    #[test]
    fn start_reports_answer_length() {
        let lex = lexicon();
        let request: StartRequest = serde_json::from_str(r#"{"mode":"auto"}"#).unwrap();

        let (session, response) = start_session(&lex, &request).unwrap();
        assert_eq!(response.answer_length, 5);
        assert!(session.secret().is_some());
    }

    #[test]
    fn start_manual_answer_requires_an_answer() {
        let lex = lexicon();
        let request = StartRequest {
            mode: Mode::ManualAnswer,
            answer: None,
        };
        assert!(start_session(&lex, &request).is_err());

        let request = StartRequest {
            mode: Mode::ManualAnswer,
            answer: Some("grate".to_string()),
        };
        let (session, _) = start_session(&lex, &request).unwrap();
        assert_eq!(session.secret().unwrap().text(), "grate");
    }

    #[test]
    fn submit_round_trip_produces_wire_history() {
        let lex = lexicon();
        let request = StartRequest {
            mode: Mode::ManualAnswer,
            answer: Some("crane".to_string()),
        };
        let (mut session, _) = start_session(&lex, &request).unwrap();

        let response = submit_guess(
            &mut session,
            &SubmitRequest {
                guess: "TRACE".to_string(),
                feedback: None,
            },
        )
        .unwrap();

        assert_eq!(response.feedback, "BGGYG");
        assert!(!response.win);
        assert!(!response.done);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""history":[{"guess":"trace","feedback":"BGGYG"}]"#));
    }

    #[test]
    fn submit_win_sets_flags() {
        let lex = lexicon();
        let (mut session, _) = start_session(
            &lex,
            &StartRequest {
                mode: Mode::ManualAnswer,
                answer: Some("arise".to_string()),
            },
        )
        .unwrap();

        let response = submit_guess(
            &mut session,
            &SubmitRequest {
                guess: "arise".to_string(),
                feedback: None,
            },
        )
        .unwrap();

        assert_eq!(response.feedback, "GGGGG");
        assert!(response.win);
        assert!(response.done);
    }

    #[test]
    fn errors_serialize_with_kind() {
        let lex = lexicon();
        let (mut session, _) = start_session(
            &lex,
            &StartRequest {
                mode: Mode::Auto,
                answer: None,
            },
        )
        .unwrap();

        let err = submit_guess(
            &mut session,
            &SubmitRequest {
                guess: "zzzzz".to_string(),
                feedback: None,
            },
        )
        .unwrap_err();

        let body = ErrorResponse::from(&err);
        assert_eq!(body.kind, "unknown_word");

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"kind\":\"unknown_word\""));
        assert!(json.contains("zzzzz"));
    }

    #[test]
    fn best_options_on_empty_history_covers_all_answers() {
        let lex = lexicon();
        let rankings = best_options(&lex, &[], &RankConfig::default()).unwrap();

        assert_eq!(rankings.total_remaining, lex.answers().len());
        assert!(!rankings.top_entropy.is_empty());

        let n = lex.answers().len() as f64;
        let best = &rankings.top_entropy[0];
        assert!(best.entropy <= n.log2() + 1e-9);
        assert!(best.expected_remaining <= n + 1e-9);
    }

    #[test]
    fn best_options_on_contradictory_history_is_empty_not_an_error() {
        let lex = lexicon();
        let history = vec![record("crane", "GGGGG"), record("crane", "BBBBB")];

        let rankings = best_options(&lex, &history, &RankConfig::default()).unwrap();
        assert_eq!(rankings.total_remaining, 0);
        assert!(rankings.top_entropy.is_empty());
        assert!(rankings.viable_answers.is_empty());
    }

    #[test]
    fn history_length_mismatch_is_rejected() {
        let lex = lexicon();
        let history = vec![record("cat", "GGG")];

        let result = best_options(&lex, &history, &RankConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::InvalidLength {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn full_options_cover_the_whole_guess_pool() {
        let lex = lexicon();
        let options = full_options(&lex, &[]).unwrap();

        assert_eq!(options.viable_guesses.len(), lex.guesses().len());
        assert_eq!(options.viable_answers.len(), lex.answers().len());
    }

    #[test]
    fn distribution_views_agree_on_totals() {
        let lex = lexicon();
        let history = vec![];

        let histogram = remaining_distribution(&lex, "tares", &history).unwrap();
        let patterns = pattern_counts(&lex, "tares", &history).unwrap();

        assert_eq!(histogram.total_remaining, lex.answers().len());
        assert_eq!(patterns.total_remaining, lex.answers().len());
        assert_eq!(
            patterns.pattern_counts.values().sum::<usize>(),
            histogram.total_remaining
        );
        assert_eq!(
            histogram.distribution.values().sum::<usize>(),
            histogram.total_remaining
        );

        // Expected remaining equals sum of squared bucket sizes over N
        let n = patterns.total_remaining as f64;
        let sum_squares: usize = patterns.pattern_counts.values().map(|c| c * c).sum();
        assert!((histogram.expected_remaining - sum_squares as f64 / n).abs() < 1e-9);
    }

    #[test]
    fn distribution_rejects_malformed_guess() {
        let lex = lexicon();
        assert!(matches!(
            remaining_distribution(&lex, "cat", &[]),
            Err(EngineError::InvalidLength { .. })
        ));
        assert!(matches!(
            pattern_counts(&lex, "cr4ne", &[]),
            Err(EngineError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn distribution_on_contradictory_history_is_empty() {
        let lex = lexicon();
        let history = vec![record("crane", "GGGGG"), record("crane", "BBBBB")];

        let histogram = remaining_distribution(&lex, "tares", &history).unwrap();
        assert_eq!(histogram.total_remaining, 0);
        assert!(histogram.distribution.is_empty());
        assert!((histogram.expected_remaining - 0.0).abs() < f64::EPSILON);
    }
}
