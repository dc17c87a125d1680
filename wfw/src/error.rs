// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Resource not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    ResourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report '{}': {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list directory '{}': {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid config file '{}': {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Invalid file name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
