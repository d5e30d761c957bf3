//! Feedback distributions for a guess
//!
//! Partitions a candidate set by the feedback pattern each candidate would
//! produce for a given guess. Everything the ranking engine needs (entropy
//! and expected remaining candidates) falls out of these bucket counts, as
//! does the remaining-count histogram served to distribution views.
//!
//! One oracle call per candidate: O(|candidates| * L) per guess. Ranking a
//! whole guess pool repeats this per pool word, which is why the pool loop
//! (not this function) is the parallel axis.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Bucket candidates by the feedback pattern they would produce
///
/// The counts always sum to `candidates.len()`.
#[must_use]
pub fn pattern_counts(guess: &Word, candidates: &[&Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Feedback::score(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Distribution of post-guess candidate counts
///
/// For each candidate, "remaining" is the size of the pattern bucket that
/// candidate falls into, i.e. how many candidates would survive if it were the
/// secret. `buckets` maps remaining-count to how many candidates share it
/// (ordered, so it serializes and prints stably), and `expected_remaining`
/// is the mean over candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct RemainingHistogram {
    pub buckets: BTreeMap<usize, usize>,
    pub expected_remaining: f64,
    pub total: usize,
}

impl RemainingHistogram {
    /// Build the histogram for one guess against the candidate set
    #[must_use]
    pub fn build(guess: &Word, candidates: &[&Word]) -> Self {
        let counts = pattern_counts(guess, candidates);
        let total = candidates.len();

        let mut buckets: BTreeMap<usize, usize> = BTreeMap::new();
        let mut sum_squares = 0usize;

        for &size in counts.values() {
            // A bucket of size n contributes n candidates that each see n remaining
            *buckets.entry(size).or_insert(0) += size;
            sum_squares += size * size;
        }

        let expected_remaining = if total == 0 {
            0.0
        } else {
            sum_squares as f64 / total as f64
        };

        Self {
            buckets,
            expected_remaining,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::parse(t).unwrap()).collect()
    }

    #[test]
    fn counts_sum_to_candidate_count() {
        let candidates = words(&["crane", "crate", "grate", "irate", "slate", "trace"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        for guess in &candidates {
            let counts = pattern_counts(guess, &refs);
            assert_eq!(counts.values().sum::<usize>(), refs.len(), "guess {guess}");
        }
    }

    #[test]
    fn identical_candidates_share_one_bucket() {
        let guess = Word::parse("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let counts = pattern_counts(&guess, &refs);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Feedback::parse("BBBBB").unwrap()], 3);
    }

    #[test]
    fn guess_in_candidates_owns_the_all_hit_bucket() {
        let candidates = words(&["crane", "crate", "slate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let counts = pattern_counts(&candidates[0], &refs);
        assert_eq!(counts[&Feedback::all_hit(5)], 1);
    }

    #[test]
    fn histogram_weights_buckets_by_their_size() {
        // ZZZZZ lumps all three candidates into one bucket of 3
        let guess = Word::parse("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let histogram = RemainingHistogram::build(&guess, &refs);
        assert_eq!(histogram.total, 3);
        assert_eq!(histogram.buckets.get(&3), Some(&3));
        assert!((histogram.expected_remaining - 3.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_perfect_splitter_leaves_singletons() {
        // AAAAA vs AAAAB differ only at the last position, CCCCC is all-miss:
        // guessing AAAAA splits all three into singleton buckets
        let guess = Word::parse("aaaaa").unwrap();
        let candidates = words(&["aaaaa", "aaaab", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let histogram = RemainingHistogram::build(&guess, &refs);
        assert_eq!(histogram.buckets.get(&1), Some(&3));
        assert!((histogram.expected_remaining - 1.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_empty_candidates() {
        let guess = Word::parse("crane").unwrap();
        let histogram = RemainingHistogram::build(&guess, &[]);

        assert_eq!(histogram.total, 0);
        assert!(histogram.buckets.is_empty());
        assert!((histogram.expected_remaining - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_occurrences_sum_to_total() {
        let candidates = words(&["crane", "crate", "grate", "irate", "slate", "trace"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let histogram = RemainingHistogram::build(&Word::parse("reads").unwrap(), &refs);
        assert_eq!(histogram.buckets.values().sum::<usize>(), refs.len());
    }
}
