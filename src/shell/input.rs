//! Line-oriented parsing of what players type.

use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::instrument;

/// Reads one line, returning `None` once the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok((read > 0).then_some(line))
}

/// Extracts a cell label from a line of input.
///
/// Takes the leading digits of the first word, the way a numeric stream
/// extraction would: `"5"`, `"+5"` and `"5abc"` all give 5, `"abc"` gives
/// nothing. Range is not checked here.
#[instrument]
pub fn parse_label(line: &str) -> Option<u8> {
    let word = line.split_whitespace().next()?;
    let word = word.strip_prefix('+').unwrap_or(word);
    let digits = word
        .find(|c: char| !c.is_ascii_digit())
        .map_or(word, |end| &word[..end]);
    digits.parse().ok()
}

/// Checks if a line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Interprets the answer to the replay question.
///
/// Only a first non-blank character of `s` or `S` means yes.
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim_start().chars().next(), Some('s' | 'S'))
}
