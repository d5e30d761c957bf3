//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::Colorize;

/// Format feedback as emoji tiles
#[must_use]
pub fn feedback_tiles(feedback: Feedback) -> String {
    let mut result = String::with_capacity(feedback.len() * 4);

    for mark in feedback.marks() {
        result.push(match mark {
            Mark::Miss => '⬜',
            Mark::Present => '🟨',
            Mark::Hit => '🟩',
        });
    }

    result
}

/// Format a guessed word with each letter colored by its mark
///
/// The word and feedback must have the same length; extra positions on
/// either side are ignored.
#[must_use]
pub fn colored_guess(word: &str, feedback: Feedback) -> String {
    word.to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| match mark {
            Mark::Miss => letter.to_string().bright_black().to_string(),
            Mark::Present => letter.to_string().yellow().bold().to_string(),
            Mark::Hit => letter.to_string().green().bold().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
