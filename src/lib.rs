//! Word Advisor
//!
//! A word-guessing puzzle engine: given prior guesses and their
//! letter-by-letter feedback, it maintains the set of still-possible
//! secrets and ranks candidate next guesses by expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use word_advisor::core::{Feedback, Word};
//!
//! let guess = Word::parse("trace").unwrap();
//! let secret = Word::parse("crane").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.to_string(), "BGGYG");
//! ```

// Core domain types
pub mod core;

// Stateless solving engine
pub mod engine;

// Word lists
pub mod lexicon;

// Per-game state machine
pub mod session;

// Request/response contract for front ends
pub mod api;

// Shared error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
