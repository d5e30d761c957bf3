//! Whole-list simulation
//!
//! Plays every answer word (or a prefix of the list) through the solver
//! with a chosen strategy and aggregates the results. Games are
//! independent, so they run on rayon; the opening-turn scores are the same
//! for every game and are computed once up front.

use crate::core::Word;
use crate::engine::{Strategy, WordScore, score_pool};
use crate::lexicon::Lexicon;
use crate::session::{DEFAULT_MAX_GUESSES, Session, Status};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub strategy: Strategy,
    pub limit: Option<usize>,
    pub first_guess: Option<String>,
    pub max_guesses: usize,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Entropy,
            limit: None,
            first_guess: None,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Aggregate results over all simulated games
#[derive(Debug)]
pub struct SimulationStats {
    pub games: usize,
    pub wins: usize,
    pub fails: usize,
    pub win_rate: f64,
    pub mean_rounds_win_only: f64,
    pub median_rounds_win_only: f64,
    /// Fails counted as `max_guesses + 1` rounds
    pub mean_rounds_including_fails: f64,
    /// rounds -> number of games won in that many rounds
    pub rounds: BTreeMap<usize, usize>,
    pub elapsed: Duration,
}

/// Run the solver against answer words and collect statistics
#[must_use]
pub fn run_simulation(lexicon: &Lexicon, config: &SimulateConfig) -> SimulationStats {
    let targets: Vec<&Word> = lexicon
        .answers()
        .iter()
        .take(config.limit.unwrap_or(lexicon.answers().len()))
        .collect();

    let started = Instant::now();

    // Turn one sees the full answer list in every game; score it once
    let universe: Vec<&Word> = lexicon.answers().iter().collect();
    let opening_scores = score_pool(lexicon.guesses(), &universe);

    let progress = ProgressBar::new(targets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<(bool, usize)> = targets
        .par_iter()
        .map(|target| {
            let outcome = play_one(lexicon, target, config, &opening_scores);
            progress.inc(1);
            outcome
        })
        .collect();

    progress.finish_with_message("done");

    let elapsed = started.elapsed();
    let games = outcomes.len();
    let mut rounds: BTreeMap<usize, usize> = BTreeMap::new();
    let mut win_turns: Vec<usize> = Vec::new();
    let mut total_including_fails = 0usize;

    for &(solved, turns) in &outcomes {
        if solved {
            *rounds.entry(turns).or_insert(0) += 1;
            win_turns.push(turns);
            total_including_fails += turns;
        } else {
            total_including_fails += config.max_guesses + 1;
        }
    }

    let wins = win_turns.len();
    let fails = games - wins;

    win_turns.sort_unstable();
    let mean_rounds_win_only = if wins == 0 {
        0.0
    } else {
        win_turns.iter().sum::<usize>() as f64 / wins as f64
    };
    let median_rounds_win_only = median(&win_turns);
    let mean_rounds_including_fails = if games == 0 {
        0.0
    } else {
        total_including_fails as f64 / games as f64
    };
    let win_rate = if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64
    };

    SimulationStats {
        games,
        wins,
        fails,
        win_rate,
        mean_rounds_win_only,
        median_rounds_win_only,
        mean_rounds_including_fails,
        rounds,
        elapsed,
    }
}

fn play_one(
    lexicon: &Lexicon,
    target: &Word,
    config: &SimulateConfig,
    opening_scores: &[WordScore],
) -> (bool, usize) {
    let Ok(session) = Session::with_answer(lexicon, target.text()) else {
        return (false, 0);
    };
    let mut session = session.with_max_guesses(config.max_guesses);

    while session.status() == Status::InProgress {
        let candidates = session.candidates();
        let candidate_texts: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

        let choice = if session.history().is_empty() {
            match &config.first_guess {
                Some(first) => Some(first.clone()),
                None => config.strategy.choose(opening_scores, &candidate_texts),
            }
        } else {
            let scores = score_pool(lexicon.guesses(), &candidates);
            config.strategy.choose(&scores, &candidate_texts)
        };

        let Some(guess) = choice else { break };
        if session.submit(&guess, None).is_err() {
            break;
        }
    }

    (
        session.status() == Status::Won,
        session.history().len(),
    )
}

fn median(sorted: &[usize]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        let answers = [
            "crane", "slate", "irate", "crate", "grate", "brace", "trace", "arise", "raise",
            "stare",
        ]
        .iter()
        .map(|t| Word::parse(t).unwrap())
        .collect();
        let extras = ["tares", "cares"]
            .iter()
            .map(|t| Word::parse(t).unwrap())
            .collect();
        Lexicon::new(answers, extras).unwrap()
    }

    #[test]
    fn entropy_strategy_solves_every_answer() {
        let lex = lexicon();
        let stats = run_simulation(&lex, &SimulateConfig::default());

        assert_eq!(stats.games, lex.answers().len());
        assert_eq!(stats.wins, stats.games);
        assert_eq!(stats.fails, 0);
        assert!((stats.win_rate - 1.0).abs() < f64::EPSILON);
        assert!(stats.mean_rounds_win_only >= 1.0);
        assert!(stats.mean_rounds_win_only <= DEFAULT_MAX_GUESSES as f64);
    }

    #[test]
    fn stats_internally_consistent() {
        let lex = lexicon();
        let stats = run_simulation(&lex, &SimulateConfig::default());

        assert_eq!(stats.wins + stats.fails, stats.games);
        assert_eq!(stats.rounds.values().sum::<usize>(), stats.wins);
        assert!(stats.mean_rounds_including_fails >= stats.mean_rounds_win_only);
    }

    #[test]
    fn limit_restricts_the_run() {
        let lex = lexicon();
        let config = SimulateConfig {
            limit: Some(3),
            ..SimulateConfig::default()
        };

        let stats = run_simulation(&lex, &config);
        assert_eq!(stats.games, 3);
    }

    #[test]
    fn forced_first_guess_still_solves() {
        let lex = lexicon();
        let config = SimulateConfig {
            first_guess: Some("tares".to_string()),
            limit: Some(4),
            ..SimulateConfig::default()
        };

        let stats = run_simulation(&lex, &config);
        assert_eq!(stats.games, 4);
        assert_eq!(stats.fails, 0);
    }

    #[test]
    fn median_handles_even_and_odd() {
        assert!((median(&[]) - 0.0).abs() < f64::EPSILON);
        assert!((median(&[3]) - 3.0).abs() < f64::EPSILON);
        assert!((median(&[2, 4]) - 3.0).abs() < f64::EPSILON);
        assert!((median(&[1, 2, 5]) - 2.0).abs() < f64::EPSILON);
    }
}
