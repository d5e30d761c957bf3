//! Word list loading
//!
//! Lists are plain text, one word per line. Blank lines and `#` comments
//! are ignored; lines that fail word validation are skipped with a warning
//! rather than aborting the load, so one stray entry cannot take down an
//! otherwise good list.

use crate::core::Word;
use crate::error::LexiconError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// # Errors
/// Returns [`LexiconError::Io`] when the file cannot be read.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(parse_word_lines(&content, &path.display().to_string()))
}

/// Parse newline-separated words, skipping unusable lines
pub(crate) fn parse_word_lines(content: &str, source: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::parse(line) {
            Ok(word) => Some(word),
            Err(err) => {
                log::warn!("skipping '{line}' from {source}: {err}");
                None
            }
        })
        .collect()
}
