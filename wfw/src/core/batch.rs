// src/core/batch.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::AnalyzerConfig;
use crate::core::counter::count;
use crate::core::frequency::{letter_frequency, word_frequency};
use crate::core::loader::load;
use crate::error::{AnalyzerError, Result};
use crate::models::{AnalyzedDocument, Report, TextDocument};

/// Runs the count, tabulate and format steps over one document.
#[inline]
#[must_use]
pub fn analyze(document: TextDocument) -> AnalyzedDocument {
    let summary = count(&document.content);
    let words = word_frequency(&document.content);
    let letters = letter_frequency(&document.content);
    AnalyzedDocument {
        document,
        summary,
        words,
        letters,
    }
}

/// The outcome of a batch run: where the report went and what it covers.
#[derive(Debug)]
pub struct Processed {
    pub report_path: PathBuf,
    pub documents: Vec<AnalyzedDocument>,
}

/// Produces report files for a single file or for a whole directory.
///
/// Holds only immutable settings, so one analyzer can be shared freely;
/// every call computes its own tables.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
}

impl TextAnalyzer {
    #[inline]
    #[must_use]
    pub const fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes the file at `path` and writes its report section to the
    /// single-file report, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `path` does not exist or cannot be read as text
    /// * The report cannot be written
    #[inline]
    pub fn process_file(&self, path: &Path) -> Result<PathBuf> {
        self.run_file(path).map(|processed| processed.report_path)
    }

    /// Analyzes every regular file directly inside `dir` and writes all
    /// sections to the directory report in one pass. Subdirectories and
    /// other non-file entries are skipped.
    ///
    /// # Errors
    ///
    /// The first failure aborts the batch and nothing is written. Failures
    /// include a missing or unlistable `dir`, any file that cannot be read
    /// as text, and a report that cannot be written.
    #[inline]
    pub fn process_directory(&self, dir: &Path) -> Result<PathBuf> {
        self.run_directory(dir).map(|processed| processed.report_path)
    }

    /// Same as [`Self::process_file`], also returning the analysis.
    ///
    /// # Errors
    ///
    /// See [`Self::process_file`].
    pub fn run_file(&self, path: &Path) -> Result<Processed> {
        let document = analyze(load(path)?);
        let report_path = self.config.file_report_path();
        write_report(&report_path, std::slice::from_ref(&document))?;
        info!(
            "Wrote report for {} to {}",
            path.display(),
            report_path.display()
        );

        Ok(Processed {
            report_path,
            documents: vec![document],
        })
    }

    /// Same as [`Self::process_directory`], also returning the analyses.
    ///
    /// # Errors
    ///
    /// See [`Self::process_directory`].
    pub fn run_directory(&self, dir: &Path) -> Result<Processed> {
        let report_path = self.config.directory_report_path();
        let mut documents = Vec::new();
        for path in self.collect_files(dir, &report_path)? {
            debug!("Analyzing {}", path.display());
            documents.push(analyze(load(&path)?));
        }

        write_report(&report_path, &documents)?;
        info!(
            "Wrote report for {} file(s) in {} to {}",
            documents.len(),
            dir.display(),
            report_path.display()
        );

        Ok(Processed {
            report_path,
            documents,
        })
    }

    /// Lists the regular files directly inside `dir` that a directory run
    /// would analyze, sorted by file name.
    ///
    /// The report file `exclude` is left out when it lives in `dir`.
    ///
    /// # Errors
    ///
    /// * [`AnalyzerError::ResourceNotFound`] if `dir` does not exist
    /// * [`AnalyzerError::ResourceUnreadable`] if `dir` is not a directory
    /// * [`AnalyzerError::DirectoryUnreadable`] if listing fails
    pub fn collect_files(&self, dir: &Path, exclude: &Path) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(dir).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AnalyzerError::ResourceNotFound {
                    path: dir.to_path_buf(),
                }
            } else {
                AnalyzerError::ResourceUnreadable {
                    path: dir.to_path_buf(),
                    source,
                }
            }
        })?;
        if !metadata.is_dir() {
            return Err(AnalyzerError::ResourceUnreadable {
                path: dir.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotADirectory),
            });
        }

        let excluded = fs::canonicalize(exclude).ok();
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    debug!("Skipping dangling link {:?}", err.path());
                    continue;
                }
                Err(source) => {
                    return Err(AnalyzerError::DirectoryUnreadable {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
            };

            if !entry.file_type().is_file() {
                debug!("Skipping non-file entry {}", entry.path().display());
                continue;
            }

            if let Some(pattern) = &self.config.file_pattern
                && !pattern.matches(&entry.file_name().to_string_lossy())
            {
                debug!("Skipping {} (does not match {pattern})", entry.path().display());
                continue;
            }

            if excluded.is_some() && fs::canonicalize(entry.path()).ok() == excluded {
                debug!("Skipping report file {}", entry.path().display());
                continue;
            }

            files.push(entry.into_path());
        }

        Ok(files)
    }
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
        && err.path().is_some_and(Path::is_symlink)
}

/// Writes every document's section to `path` in a single write, truncating
/// any previous content. Creates the parent directory when missing.
fn write_report(path: &Path, documents: &[AnalyzedDocument]) -> Result<()> {
    let to_write_failure = |source| AnalyzerError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_failure)?;
    }

    let mut report = Report::new();
    for document in documents {
        report.push(document.section());
    }
    fs::write(path, report.to_string()).map_err(to_write_failure)
}
