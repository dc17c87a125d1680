// src/models/count_summary.rs
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
}

impl fmt::Display for CountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {}, Words: {}, Characters: {}",
            self.lines, self.words, self.characters
        )
    }
}
