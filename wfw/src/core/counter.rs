// src/core/counter.rs
use crate::core::frequency::tokenize;
use crate::models::CountSummary;

/// Line, word and character counts for `text`.
///
/// Lines are newline characters plus one, so empty text has one line and a
/// trailing newline adds a line. Characters are Unicode scalar values.
#[inline]
#[must_use]
pub fn count(text: &str) -> CountSummary {
    CountSummary {
        lines: text.matches('\n').count().saturating_add(1),
        words: tokenize(text).count(),
        characters: text.chars().count(),
    }
}
