// src/models.rs
pub mod analyzed_document;
pub mod count_summary;
pub mod frequency_table;
pub mod report;
pub mod text_document;

pub use analyzed_document::AnalyzedDocument;
pub use count_summary::CountSummary;
pub use frequency_table::FrequencyTable;
pub use report::{Report, ReportSection};
pub use text_document::TextDocument;
