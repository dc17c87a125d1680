// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::{AnalyzerConfig, ConfigFile, load_config_file};
pub use crate::core::batch::{Processed, TextAnalyzer, analyze};
pub use crate::core::counter::count;
pub use crate::core::format::{format_frequency_table, format_letter_frequencies, format_section};
pub use crate::core::frequency::{letter_frequency, relative_frequency, tokenize, word_frequency};
pub use crate::core::loader::load;
pub use error::{AnalyzerError, Result};
pub use models::{
    AnalyzedDocument, CountSummary, FrequencyTable, Report, ReportSection, TextDocument,
};
