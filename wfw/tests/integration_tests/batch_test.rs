// tests/integration_tests/batch_test.rs
use super::common::{analyzer_writing_to, section_names, setup_test_directory};
use anyhow::Result;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;
use wfw::AnalyzerError;

#[test]
fn test_process_file_writes_report() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let output = TempDir::new()?;
    let analyzer = analyzer_writing_to(output.path());

    let report_path = analyzer.process_file(&temp_dir.path().join("testdata2.txt"))?;
    assert!(report_path.is_file());
    assert!(report_path.ends_with("ResultsOfProcessing.txt"));

    let report = fs::read_to_string(report_path)?;
    assert!(!report.is_empty());
    assert_eq!(section_names(&report), vec!["testdata2.txt"]);
    Ok(())
}

#[test]
fn test_process_directory_counts_regular_files_only() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let output = TempDir::new()?;
    let analyzer = analyzer_writing_to(output.path());

    let report_path = analyzer.process_directory(temp_dir.path())?;
    assert!(report_path.ends_with("ResultsOfProcessing2.txt"));

    let report = fs::read_to_string(report_path)?;
    let names: BTreeSet<String> = section_names(&report).into_iter().collect();
    let expected: BTreeSet<String> = [".hidden.txt", "empty.txt", "testdata1.txt", "testdata2.txt"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(names, expected, "Subdirectories must be skipped");
    Ok(())
}

#[test]
fn test_single_and_directory_reports_are_distinct() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let output = TempDir::new()?;
    let analyzer = analyzer_writing_to(output.path());

    let single = analyzer.process_file(&temp_dir.path().join("testdata1.txt"))?;
    let batch = analyzer.process_directory(temp_dir.path())?;
    assert_ne!(single, batch);
    assert_eq!(section_names(&fs::read_to_string(single)?).len(), 1);
    assert_eq!(section_names(&fs::read_to_string(batch)?).len(), 4);
    Ok(())
}

#[test]
fn test_directory_failure_aborts_batch() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    fs::write(temp_dir.path().join("zz_binary.dat"), [0xc3_u8, 0x28])?;
    let output = TempDir::new()?;
    let analyzer = analyzer_writing_to(output.path());

    let err = analyzer
        .process_directory(temp_dir.path())
        .expect_err("invalid UTF-8 should abort the batch");
    assert!(matches!(err, AnalyzerError::ResourceUnreadable { .. }));
    assert!(!output.path().join("ResultsOfProcessing2.txt").exists());
    Ok(())
}
