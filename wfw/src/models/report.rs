// src/models/report.rs
use std::fmt;

/// The formatted statistics block for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub name: String,
    pub text: String,
}

/// Ordered per-file sections, rendered by concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            f.write_str(&section.text)?;
        }
        Ok(())
    }
}
