// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wfw::{AnalyzerConfig, TextAnalyzer};

pub const PREAMBLE: &str = "We the People of the United States, in Order to form a more perfect Union,\n\
establish Justice, insure domestic Tranquility, provide for the common defence,\n\
promote the general Welfare, and secure the Blessings of Liberty to ourselves\n\
and our Posterity, do ordain and establish this Constitution for the United States of America.";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "testdata1.txt", "Hello hello world.\nGoodbye world!\n")?;
    create_test_file(temp_dir.path(), "testdata2.txt", PREAMBLE)?;
    create_test_file(temp_dir.path(), ".hidden.txt", "Hidden but still a regular file")?;
    create_test_file(temp_dir.path(), "empty.txt", "")?;

    create_test_file(temp_dir.path(), "subdir/nested.txt", "Never analyzed")?;
    fs::create_dir_all(temp_dir.path().join("empty_subdir"))?;

    Ok(temp_dir)
}

pub fn analyzer_writing_to(dir: &Path) -> TextAnalyzer {
    TextAnalyzer::new(AnalyzerConfig {
        output_dir: dir.to_path_buf(),
        ..AnalyzerConfig::default()
    })
}

pub fn section_names(report: &str) -> Vec<String> {
    report
        .lines()
        .filter_map(|line| line.strip_prefix("File: "))
        .map(str::to_owned)
        .collect()
}
