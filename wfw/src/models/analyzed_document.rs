// src/models/analyzed_document.rs
use crate::core::format::format_section;
use crate::models::{CountSummary, FrequencyTable, ReportSection, TextDocument};

/// A document together with everything computed from it.
#[derive(Debug, Clone)]
pub struct AnalyzedDocument {
    pub document: TextDocument,
    pub summary: CountSummary,
    pub words: FrequencyTable<String>,
    pub letters: FrequencyTable<char>,
}

impl AnalyzedDocument {
    #[inline]
    #[must_use]
    pub fn section(&self) -> ReportSection {
        format_section(&self.document, &self.summary, &self.words, &self.letters)
    }
}
