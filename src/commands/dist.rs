//! Distribution views for a single guess

use super::parse_history;
use crate::api;
use crate::lexicon::Lexicon;
use crate::output;
use anyhow::Result;

/// Show how a guess would partition the remaining candidates
///
/// Default view is the remaining-count histogram; `patterns` switches to
/// raw feedback-pattern buckets.
///
/// # Errors
/// Fails on malformed input or a length mismatch with the lexicon.
pub fn run_dist(
    lexicon: &Lexicon,
    guess: &str,
    history_args: &[String],
    patterns: bool,
    json: bool,
) -> Result<()> {
    let history = parse_history(history_args)?;

    if patterns {
        let response = api::pattern_counts(lexicon, guess, &history)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            output::print_pattern_counts(&response, 25);
        }
    } else {
        let response = api::remaining_distribution(lexicon, guess, &history)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            output::print_remaining_distribution(&response);
        }
    }

    Ok(())
}
