//! Guess ranking by information metrics
//!
//! For each guess in a pool, two numbers summarize its feedback
//! distribution over the current candidate set of size N with pattern
//! buckets `{n_i}`:
//!
//! - entropy `H = -Σ (n_i/N) * log2(n_i/N)`: expected bits revealed about
//!   which pattern occurs;
//! - expected remaining `E = Σ n_i²/N`: expected candidate-set size after
//!   the guess, under a uniform prior over candidates.
//!
//! Scoring a whole pool is the expensive operation, O(|pool|·N·L), and each
//! pool word is independent and read-only over the candidates, so the pool
//! loop runs on rayon. Order of the merged results is fixed afterwards by
//! sorting with a deterministic comparator: metric first, then lexical word
//! order, so rankings reproduce exactly across runs and machines.

use super::distribution::pattern_counts;
use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Information metrics for a single guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Derive metrics from pattern buckets
///
/// A single bucket yields entropy 0; empty input yields 0 for both, so the
/// degenerate cases (one or zero candidates) never divide by zero.
#[must_use]
pub fn metrics_from_counts(counts: &FxHashMap<Feedback, usize>) -> GuessMetrics {
    let total: usize = counts.values().sum();
    if total == 0 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
        };
    }

    let total_f = total as f64;
    let mut entropy = 0.0;
    let mut expected_remaining = 0.0;

    for &count in counts.values() {
        let p = count as f64 / total_f;
        entropy -= p * p.log2();
        expected_remaining += p * count as f64;
    }

    GuessMetrics {
        entropy,
        expected_remaining,
    }
}

/// Metrics for one guess against the candidate set
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    metrics_from_counts(&pattern_counts(guess, candidates))
}

/// One pool word annotated with both metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Score every pool word against the candidates, in pool order
#[must_use]
pub fn score_pool(guess_pool: &[Word], candidates: &[&Word]) -> Vec<WordScore> {
    guess_pool
        .par_iter()
        .map(|guess| {
            let metrics = score_guess(guess, candidates);
            WordScore {
                word: guess.text().to_string(),
                entropy: metrics.entropy,
                expected_remaining: metrics.expected_remaining,
            }
        })
        .collect()
}

/// Ranking list sizes
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Entries in each top/bottom list
    pub top_k: usize,
    /// Cap on the annotated viable-answer list
    pub viable_k: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            viable_k: 20,
        }
    }
}

/// Ranked views over a scored guess pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    pub total_remaining: usize,
    pub top_entropy: Vec<WordScore>,
    pub bot_entropy: Vec<WordScore>,
    pub top_remaining: Vec<WordScore>,
    pub bot_remaining: Vec<WordScore>,
    pub viable_answers: Vec<WordScore>,
}

impl Rankings {
    /// The rankings for a contradictory history: nothing remains
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_remaining: 0,
            top_entropy: Vec::new(),
            bot_entropy: Vec::new(),
            top_remaining: Vec::new(),
            bot_remaining: Vec::new(),
            viable_answers: Vec::new(),
        }
    }
}

/// Unfiltered full score lists for client-side searching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullOptions {
    pub viable_answers: Vec<WordScore>,
    pub viable_guesses: Vec<WordScore>,
}

fn entropy_desc(a: &WordScore, b: &WordScore) -> Ordering {
    b.entropy
        .total_cmp(&a.entropy)
        .then_with(|| a.word.cmp(&b.word))
}

fn expected_asc(a: &WordScore, b: &WordScore) -> Ordering {
    a.expected_remaining
        .total_cmp(&b.expected_remaining)
        .then_with(|| a.word.cmp(&b.word))
}

fn head(list: &[&WordScore], k: usize) -> Vec<WordScore> {
    list.iter().take(k).map(|&s| s.clone()).collect()
}

fn tail(list: &[&WordScore], k: usize) -> Vec<WordScore> {
    list[list.len().saturating_sub(k)..]
        .iter()
        .map(|&s| s.clone())
        .collect()
}

/// Rank a guess pool against the candidate set
///
/// While more than two candidates remain, guesses that reveal nothing
/// (zero entropy, or no expected reduction at all) are left out of the
/// top/bottom lists; once the game is down to two or fewer candidates the
/// lists collapse to the viable candidates themselves. Zero candidates
/// yields empty lists rather than an error; the caller decides how to
/// present a contradicted history.
#[must_use]
pub fn rank(guess_pool: &[Word], candidates: &[&Word], config: &RankConfig) -> Rankings {
    let total = candidates.len();
    if total == 0 {
        return Rankings::empty();
    }

    let scores = score_pool(guess_pool, candidates);
    let candidate_texts: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

    let considered: Vec<&WordScore> = if total > 2 {
        scores
            .iter()
            .filter(|s| s.entropy > 0.0 && s.expected_remaining < total as f64)
            .collect()
    } else {
        scores
            .iter()
            .filter(|s| candidate_texts.contains(s.word.as_str()))
            .collect()
    };

    let mut by_entropy = considered.clone();
    by_entropy.sort_by(|a, b| entropy_desc(a, b));

    let mut by_expected = considered;
    by_expected.sort_by(|a, b| expected_asc(a, b));

    let viable_answers: Vec<WordScore> = by_entropy
        .iter()
        .filter(|s| candidate_texts.contains(s.word.as_str()))
        .take(config.viable_k)
        .map(|&s| s.clone())
        .collect();

    Rankings {
        total_remaining: total,
        top_entropy: head(&by_entropy, config.top_k),
        bot_entropy: tail(&by_entropy, config.top_k),
        top_remaining: head(&by_expected, config.top_k),
        bot_remaining: tail(&by_expected, config.top_k),
        viable_answers,
    }
}

/// Score everything, filter nothing
#[must_use]
pub fn full_options(guess_pool: &[Word], candidates: &[&Word]) -> FullOptions {
    let mut viable_guesses = score_pool(guess_pool, candidates);
    viable_guesses.sort_by(entropy_desc);

    let candidate_texts: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();
    let viable_answers: Vec<WordScore> = viable_guesses
        .iter()
        .filter(|s| candidate_texts.contains(s.word.as_str()))
        .cloned()
        .collect();

    FullOptions {
        viable_answers,
        viable_guesses,
    }
}
