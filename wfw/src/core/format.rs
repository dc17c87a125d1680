// src/core/format.rs
use std::fmt::{Display, Write as _};
use std::hash::Hash;

use crate::models::{CountSummary, FrequencyTable, ReportSection, TextDocument};

const TABLE_HEADER: &str = "| Word | Count | Relative Frequency |";
const TABLE_RULE: &str = "|------|-------|-------------------|";

/// Percentage of `count` in `total` with two decimals. A zero total renders
/// as `0.00` rather than failing.
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return String::from("0.00");
    }
    format!("{:.2}", (count as f64 / total as f64) * 100.0)
}

/// Renders `table` as a markdown-style table, most frequent token first.
///
/// The output has no trailing newline. Percentages are relative to
/// `total_words`.
#[must_use]
pub fn format_frequency_table<K>(table: &FrequencyTable<K>, total_words: usize) -> String
where
    K: Display + Ord + Eq + Hash,
{
    let mut lines = vec![TABLE_HEADER.to_owned(), TABLE_RULE.to_owned()];
    for (token, count) in table.sorted() {
        lines.push(format!(
            "| {token} | {count} | {}% |",
            percentage(count, total_words)
        ));
    }
    lines.join("\n")
}

/// One `letter: count` line per entry, most frequent first, each line
/// newline-terminated.
#[must_use]
pub fn format_letter_frequencies(table: &FrequencyTable<char>) -> String {
    let mut out = String::new();
    for (letter, count) in table.sorted() {
        let _ = writeln!(out, "{letter}: {count}");
    }
    out
}

/// Assembles the full report block for one document, ending with a blank
/// separator line.
#[must_use]
pub fn format_section(
    document: &TextDocument,
    summary: &CountSummary,
    words: &FrequencyTable<String>,
    letters: &FrequencyTable<char>,
) -> ReportSection {
    let mut text = String::new();
    let _ = writeln!(text, "File: {}", document.name);
    let _ = writeln!(text, "{summary}");
    text.push_str("Word Frequencies:\n");
    text.push_str(&format_frequency_table(words, words.total()));
    text.push_str("\nLetter Frequencies:\n");
    text.push_str(&format_letter_frequencies(letters));
    text.push('\n');

    ReportSection {
        name: document.name.clone(),
        text,
    }
}
