// src/models/text_document.rs

/// A loaded text resource: its raw content and the name used in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    pub name: String,
    pub content: String,
}

impl TextDocument {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
