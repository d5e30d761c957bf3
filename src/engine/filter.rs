//! Candidate filtering against recorded feedback
//!
//! A candidate survives a record exactly when scoring the recorded guess
//! against it reproduces the recorded feedback. Filtering a whole history
//! is the intersection of the per-record constraints, so the result does
//! not depend on record order: histories assembled out of order (or
//! supplied wholesale by a caller) filter identically.
//!
//! The candidate set is always recomputed from the full universe rather
//! than narrowed incrementally, so stale state can never leak between
//! queries. An empty result is a legitimate answer, not an error: manually
//! entered feedback can contradict itself.

use crate::core::{Feedback, GuessRecord, Word};

/// Whether `candidate` could be the secret given one record
#[inline]
#[must_use]
pub fn consistent(candidate: &Word, record: &GuessRecord) -> bool {
    Feedback::score(&record.guess, candidate) == record.feedback
}

/// Narrow `candidates` by a single record
#[must_use]
pub fn filter_one<'a>(candidates: &[&'a Word], record: &GuessRecord) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| consistent(candidate, record))
        .collect()
}

/// Words from `universe` consistent with every record in `history`
///
/// An empty history returns the whole universe. Universe order is
/// preserved, which keeps downstream rankings deterministic.
#[must_use]
pub fn filter_all<'a>(universe: &'a [Word], history: &[GuessRecord]) -> Vec<&'a Word> {
    universe
        .iter()
        .filter(|candidate| history.iter().all(|record| consistent(candidate, record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::parse(t).unwrap()).collect()
    }

    fn record(guess: &str, feedback: &str) -> GuessRecord {
        GuessRecord::new(
            Word::parse(guess).unwrap(),
            Feedback::parse(feedback).unwrap(),
        )
        .unwrap()
    }

    fn texts<'a>(filtered: &[&'a Word]) -> Vec<&'a str> {
        filtered.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_history_keeps_everything() {
        let universe = words(&["crane", "slate", "irate"]);
        let remaining = filter_all(&universe, &[]);
        assert_eq!(remaining.len(), universe.len());
    }

    #[test]
    fn all_hit_record_pins_the_secret() {
        let universe = words(&["crane", "slate", "irate"]);
        let remaining = filter_all(&universe, &[record("irate", "GGGGG")]);
        assert_eq!(texts(&remaining), ["irate"]);
    }

    #[test]
    fn record_constrains_by_reproduced_feedback() {
        let universe = words(&["crane", "crate", "grate", "irate", "slate"]);
        let secret = Word::parse("grate").unwrap();

        let observed = GuessRecord::scored(Word::parse("crane").unwrap(), &secret);
        let remaining = filter_all(&universe, &[observed]);

        // Every survivor must reproduce the observed feedback; GRATE must survive
        assert!(texts(&remaining).contains(&"grate"));
        assert!(!texts(&remaining).contains(&"crane"));
    }

    #[test]
    fn contradictory_history_filters_to_empty() {
        let universe = words(&["crane", "slate", "irate"]);

        // ZZZZZ claimed all-hit: no universe word satisfies it
        let remaining = filter_all(&universe, &[record("zzzzz", "GGGGG")]);
        assert!(remaining.is_empty());

        // Self-contradictory pair of records for the same guess
        let remaining = filter_all(
            &universe,
            &[record("crane", "GGGGG"), record("crane", "BBBBB")],
        );
        assert!(remaining.is_empty());
    }

    #[test]
    fn filtering_is_invariant_under_history_permutation() {
        let universe = words(&[
            "crane", "crate", "grate", "irate", "slate", "trace", "brace", "place",
        ]);
        let secret = Word::parse("brace").unwrap();

        let history = vec![
            GuessRecord::scored(Word::parse("slate").unwrap(), &secret),
            GuessRecord::scored(Word::parse("crane").unwrap(), &secret),
            GuessRecord::scored(Word::parse("irate").unwrap(), &secret),
        ];

        let baseline = texts(&filter_all(&universe, &history));

        let mut reversed = history.clone();
        reversed.reverse();
        assert_eq!(texts(&filter_all(&universe, &reversed)), baseline);

        let mut rotated = history.clone();
        rotated.rotate_left(1);
        assert_eq!(texts(&filter_all(&universe, &rotated)), baseline);
    }

    #[test]
    fn filter_one_agrees_with_filter_all() {
        let universe = words(&["crane", "crate", "grate", "irate", "slate"]);
        let rec = record("crane", "BYBBG");

        let refs: Vec<&Word> = universe.iter().collect();
        let one = texts(&filter_one(&refs, &rec));
        let all = texts(&filter_all(&universe, std::slice::from_ref(&rec)));
        assert_eq!(one, all);
    }
}
