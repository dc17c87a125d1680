// src/core/frequency.rs
use regex::Regex;
use std::sync::OnceLock;

use crate::models::FrequencyTable;

/// A word is a maximal run of letters, digits or underscores. Combining
/// marks stay attached to the letter they modify so lowercasing never splits
/// a word in two.
const WORD_PATTERN: &str = r"[\p{L}\p{M}\p{N}_]+";

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"))
}

/// Iterates over the words of `text` without changing their case.
#[inline]
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    word_regex().find_iter(text).map(|m| m.as_str())
}

/// Counts every word of `text`, case-insensitively.
///
/// The returned table carries its own total, which is what
/// [`relative_frequency`] divides by.
#[inline]
#[must_use]
pub fn word_frequency(text: &str) -> FrequencyTable<String> {
    let lowered = text.to_lowercase();
    tokenize(&lowered).map(str::to_owned).collect()
}

/// Counts ASCII letters `a`-`z` of `text` after lowercasing. Every other
/// character, including non-ASCII letters, is ignored.
#[inline]
#[must_use]
pub fn letter_frequency(text: &str) -> FrequencyTable<char> {
    text.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Share of `word` (any case) among all words counted in `table`.
///
/// Returns `0.0` for an absent word or an empty table.
#[inline]
#[must_use]
pub fn relative_frequency(table: &FrequencyTable<String>, word: &str) -> f64 {
    table.relative_frequency(word.to_lowercase().as_str())
}
