//! Command implementations

pub mod assist;
pub mod dist;
pub mod options;
pub mod play;
pub mod simulate;
pub mod solve;

pub use assist::run_assist;
pub use dist::run_dist;
pub use options::run_options;
pub use play::run_play;
pub use simulate::{SimulateConfig, SimulationStats, run_simulation};
pub use solve::{SolveConfig, SolveReport, solve_word};

use crate::core::{Feedback, GuessRecord, Word};
use anyhow::{Context, Result, anyhow};
use std::io::{self, Write};

/// Parse `guess:FEEDBACK` history entries from the command line
///
/// Accepts `:` or `=` as the separator, e.g. `crane:BYBBG slate=GGBBB`.
///
/// # Errors
/// Fails with context naming the offending entry.
pub fn parse_history(entries: &[String]) -> Result<Vec<GuessRecord>> {
    entries
        .iter()
        .map(|entry| {
            let (guess, feedback) = entry
                .split_once(':')
                .or_else(|| entry.split_once('='))
                .ok_or_else(|| anyhow!("history entry '{entry}' must look like guess:BYGGB"))?;

            let guess = Word::parse(guess)
                .with_context(|| format!("bad guess in history entry '{entry}'"))?;
            let feedback = Feedback::parse(feedback)
                .with_context(|| format!("bad feedback in history entry '{entry}'"))?;

            GuessRecord::new(guess, feedback)
                .with_context(|| format!("mismatched lengths in history entry '{entry}'"))
        })
        .collect()
}

/// Prompt on stdout and read one trimmed line from stdin
pub(crate) fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_history_accepts_both_separators() {
        let entries = vec!["crane:BYBBG".to_string(), "slate=GGBBB".to_string()];
        let history = parse_history(&entries).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess.text(), "crane");
        assert_eq!(history[0].feedback.to_string(), "BYBBG");
        assert_eq!(history[1].guess.text(), "slate");
    }

    #[test]
    fn parse_history_rejects_malformed_entries() {
        assert!(parse_history(&["crane".to_string()]).is_err());
        assert!(parse_history(&["crane:BYXBG".to_string()]).is_err());
        assert!(parse_history(&["cr4ne:BYBBG".to_string()]).is_err());
        assert!(parse_history(&["crane:BYB".to_string()]).is_err());
    }

    #[test]
    fn parse_history_empty_is_fine() {
        assert!(parse_history(&[]).unwrap().is_empty());
    }
}
