// src/core/loader.rs
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AnalyzerError, Result};
use crate::models::TextDocument;
use crate::utils::display_name;

/// Reads the whole file at `path` into a [`TextDocument`] named after the
/// file's base name.
///
/// Content is kept exactly as stored: newlines, casing and whitespace are
/// untouched.
///
/// # Errors
///
/// * [`AnalyzerError::ResourceNotFound`] if nothing exists at `path`
/// * [`AnalyzerError::ResourceUnreadable`] if `path` cannot be opened or is
///   not valid UTF-8 text (including when it names a directory)
#[inline]
pub fn load(path: &Path) -> Result<TextDocument> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AnalyzerError::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnalyzerError::ResourceUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(TextDocument::new(display_name(path), content))
}
