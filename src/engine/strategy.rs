//! Next-guess selection strategies
//!
//! Strategies pick one guess from an already-scored pool. They are used by
//! the automated paths (solve, play suggestions, simulation); the ranking
//! views hand the whole scored list to the caller instead.

use super::ranking::WordScore;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// How to pick the next guess from scored options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Maximize entropy over the whole pool (viable-only at two or fewer
    /// candidates, when probing stops paying for itself)
    Entropy,
    /// Maximize entropy among still-viable candidates only
    ViableEntropy,
    /// Minimize expected remaining candidates
    MinExpected,
    /// Uniform random viable candidate
    RandomViable,
}

impl Strategy {
    /// Parse a strategy name, defaulting to `Entropy`
    ///
    /// Recognized: `entropy`, `viable-entropy`, `min-expected`, `random`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "viable-entropy" | "viable_entropy" | "viable" => Self::ViableEntropy,
            "min-expected" | "min_expected" | "expected" => Self::MinExpected,
            "random" | "random-viable" | "random_viable" => Self::RandomViable,
            _ => Self::Entropy,
        }
    }

    /// Choose a next guess, or `None` when no candidate remains
    ///
    /// Deterministic for every variant except `RandomViable`: ties break to
    /// the lexically smaller word.
    #[must_use]
    pub fn choose(self, scores: &[WordScore], candidates: &FxHashSet<&str>) -> Option<String> {
        if candidates.is_empty() {
            return None;
        }

        if self == Self::RandomViable {
            let viable: Vec<&WordScore> = scores
                .iter()
                .filter(|s| candidates.contains(s.word.as_str()))
                .collect();
            if let Some(score) = viable.choose(&mut rand::rng()) {
                return Some(score.word.clone());
            }
            return smallest_candidate(candidates);
        }

        // Probing non-answers cannot beat guessing once only a coin flip
        // remains, so restrict to viable candidates at two or fewer
        let viable_only = matches!(self, Self::ViableEntropy) || candidates.len() <= 2;

        let pool: Vec<&WordScore> = if viable_only {
            scores
                .iter()
                .filter(|s| candidates.contains(s.word.as_str()))
                .collect()
        } else {
            scores.iter().collect()
        };

        if pool.is_empty() {
            return smallest_candidate(candidates);
        }

        let best = match self {
            Self::MinExpected => pool.into_iter().min_by(|a, b| {
                a.expected_remaining
                    .total_cmp(&b.expected_remaining)
                    .then_with(|| a.word.cmp(&b.word))
            }),
            _ => pool.into_iter().min_by(|a, b| {
                b.entropy
                    .total_cmp(&a.entropy)
                    .then_with(|| a.word.cmp(&b.word))
            }),
        };

        best.map(|s| s.word.clone())
    }
}

fn smallest_candidate(candidates: &FxHashSet<&str>) -> Option<String> {
    candidates.iter().min().map(|&w| w.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(word: &str, entropy: f64, expected: f64) -> WordScore {
        WordScore {
            word: word.to_string(),
            entropy,
            expected_remaining: expected,
        }
    }

    fn set<'a>(words: &[&'a str]) -> FxHashSet<&'a str> {
        words.iter().copied().collect()
    }

    #[test]
    fn entropy_picks_highest_entropy() {
        let scores = vec![
            score("crane", 2.0, 1.5),
            score("slate", 2.5, 1.2),
            score("irate", 1.0, 2.0),
        ];
        let candidates = set(&["crane", "irate", "slate"]);

        let choice = Strategy::Entropy.choose(&scores, &candidates);
        assert_eq!(choice.as_deref(), Some("slate"));
    }

    #[test]
    fn entropy_breaks_ties_lexically() {
        let scores = vec![score("tares", 2.0, 1.5), score("rates", 2.0, 1.5)];
        let candidates = set(&["rates", "tares", "cares"]);

        let choice = Strategy::Entropy.choose(&scores, &candidates);
        assert_eq!(choice.as_deref(), Some("rates"));
    }

    #[test]
    fn entropy_restricts_to_viable_when_two_remain() {
        // The probe scores better, but with two candidates left only a
        // viable word can win this turn
        let scores = vec![
            score("probe", 1.0, 1.0),
            score("crane", 0.5, 1.5),
            score("slate", 0.4, 1.5),
        ];
        let candidates = set(&["crane", "slate"]);

        let choice = Strategy::Entropy.choose(&scores, &candidates);
        assert_eq!(choice.as_deref(), Some("crane"));
    }

    #[test]
    fn viable_entropy_ignores_non_candidates() {
        let scores = vec![
            score("probe", 3.0, 1.0),
            score("crane", 1.0, 2.0),
            score("slate", 2.0, 1.5),
        ];
        let candidates = set(&["crane", "slate", "irate"]);

        let choice = Strategy::ViableEntropy.choose(&scores, &candidates);
        assert_eq!(choice.as_deref(), Some("slate"));
    }

    #[test]
    fn min_expected_picks_smallest_expected() {
        let scores = vec![
            score("crane", 2.0, 1.8),
            score("slate", 1.8, 1.2),
            score("irate", 2.2, 2.4),
        ];
        let candidates = set(&["crane", "irate", "slate"]);

        let choice = Strategy::MinExpected.choose(&scores, &candidates);
        assert_eq!(choice.as_deref(), Some("slate"));
    }

    #[test]
    fn random_viable_returns_a_candidate() {
        let scores = vec![
            score("probe", 3.0, 1.0),
            score("crane", 1.0, 2.0),
            score("slate", 2.0, 1.5),
        ];
        let candidates = set(&["crane", "slate"]);

        for _ in 0..20 {
            let choice = Strategy::RandomViable.choose(&scores, &candidates).unwrap();
            assert!(candidates.contains(choice.as_str()));
        }
    }

    #[test]
    fn no_candidates_yields_none() {
        let scores = vec![score("crane", 1.0, 1.0)];
        assert_eq!(Strategy::Entropy.choose(&scores, &set(&[])), None);
        assert_eq!(Strategy::RandomViable.choose(&scores, &set(&[])), None);
    }

    #[test]
    fn falls_back_to_candidate_outside_scored_pool() {
        // Candidate never scored (not in the guess pool): still suggested
        let scores = vec![score("probe", 3.0, 1.0)];
        let candidates = set(&["uncap"]);

        let choice = Strategy::ViableEntropy.choose(&scores, &candidates);
        assert_eq!(choice.as_deref(), Some("uncap"));
    }

    #[test]
    fn from_name_parses_known_strategies() {
        assert_eq!(Strategy::from_name("entropy"), Strategy::Entropy);
        assert_eq!(Strategy::from_name("viable-entropy"), Strategy::ViableEntropy);
        assert_eq!(Strategy::from_name("min-expected"), Strategy::MinExpected);
        assert_eq!(Strategy::from_name("random"), Strategy::RandomViable);
        assert_eq!(Strategy::from_name("anything-else"), Strategy::Entropy);
    }
}
