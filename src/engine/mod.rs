//! Solving engine
//!
//! Stateless building blocks: candidate filtering, feedback distributions,
//! metric ranking, and next-guess strategies. Nothing here owns game state;
//! callers pass the history (or the candidate set derived from it) on every
//! call.

pub mod distribution;
pub mod filter;
pub mod ranking;
pub mod strategy;

pub use distribution::{RemainingHistogram, pattern_counts};
pub use filter::{consistent, filter_all, filter_one};
pub use ranking::{
    FullOptions, GuessMetrics, RankConfig, Rankings, WordScore, full_options, rank, score_guess,
    score_pool,
};
pub use strategy::Strategy;
