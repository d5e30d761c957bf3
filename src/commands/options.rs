//! Best-options and full-options reports

use super::parse_history;
use crate::api;
use crate::engine::RankConfig;
use crate::lexicon::Lexicon;
use crate::output;
use anyhow::Result;

/// Rank next guesses for a history given on the command line
///
/// # Errors
/// Fails on malformed history entries or a history/lexicon length mismatch.
pub fn run_options(
    lexicon: &Lexicon,
    history_args: &[String],
    full: bool,
    json: bool,
    top_k: usize,
) -> Result<()> {
    let history = parse_history(history_args)?;

    if full {
        let options = api::full_options(lexicon, &history)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&options)?);
        } else {
            output::display::print_full_options(&options);
        }
        return Ok(());
    }

    let config = RankConfig {
        top_k,
        viable_k: top_k * 2,
    };
    let rankings = api::best_options(lexicon, &history, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
    } else {
        output::print_rankings(&rankings);
    }

    Ok(())
}
