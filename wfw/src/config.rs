// src/config.rs
use glob::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnalyzerError, Result};

pub const DEFAULT_FILE_REPORT: &str = "ResultsOfProcessing.txt";
pub const DEFAULT_DIRECTORY_REPORT: &str = "ResultsOfProcessing2.txt";
pub const CONFIG_FILE_NAME: &str = "wfw.toml";

/// Optional settings read from a `wfw.toml` file. Every key may be omitted.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub file_report: Option<String>,
    pub directory_report: Option<String>,
    pub glob: Option<String>,
}

/// Resolved settings for a [`crate::TextAnalyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Directory the report files are written to.
    pub output_dir: PathBuf,
    /// Report name for single-file mode.
    pub file_report: String,
    /// Report name for directory mode.
    pub directory_report: String,
    /// Directory mode only analyzes files whose name matches.
    pub file_pattern: Option<Pattern>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_report: DEFAULT_FILE_REPORT.to_owned(),
            directory_report: DEFAULT_DIRECTORY_REPORT.to_owned(),
            file_pattern: None,
        }
    }
}

impl AnalyzerConfig {
    #[inline]
    #[must_use]
    pub fn file_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_report)
    }

    #[inline]
    #[must_use]
    pub fn directory_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.directory_report)
    }

    /// Fills every unset value from `file`, then from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidPattern`] if the resulting glob does
    /// not parse.
    pub fn resolve(
        output_dir: Option<PathBuf>,
        file_report: Option<String>,
        directory_report: Option<String>,
        glob: Option<String>,
        file: ConfigFile,
    ) -> Result<Self> {
        let defaults = Self::default();
        let file_pattern = glob
            .or(file.glob)
            .map(|pattern| parse_pattern(&pattern))
            .transpose()?;

        Ok(Self {
            output_dir: output_dir.or(file.output_dir).unwrap_or(defaults.output_dir),
            file_report: file_report
                .or(file.file_report)
                .unwrap_or(defaults.file_report),
            directory_report: directory_report
                .or(file.directory_report)
                .unwrap_or(defaults.directory_report),
            file_pattern,
        })
    }
}

/// Parses a file name glob such as `*.txt`.
///
/// # Errors
///
/// Returns [`AnalyzerError::InvalidPattern`] for malformed globs.
#[inline]
pub fn parse_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|source| AnalyzerError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

/// Reads `path` as a TOML [`ConfigFile`].
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The contents are not valid TOML or contain unknown keys
#[inline]
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|source| AnalyzerError::ResourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| AnalyzerError::InvalidConfig {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Loads the config at `explicit` if given, otherwise `wfw.toml` in `dir`
/// when it exists. A missing default file yields an empty config.
///
/// # Errors
///
/// Propagates errors from [`load_config_file`]; an explicit path that does
/// not exist is [`AnalyzerError::ResourceNotFound`].
pub fn discover_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AnalyzerError::ResourceNotFound {
                path: path.to_path_buf(),
            });
        }
        return load_config_file(path);
    }

    let default_path = dir.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        load_config_file(&default_path)
    } else {
        Ok(ConfigFile::default())
    }
}
