use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

/// The Preamble sentence, stored over four lines.
pub const PREAMBLE: &str = "We the People of the United States, in Order to form a more perfect Union,\n\
establish Justice, insure domestic Tranquility, provide for the common defence,\n\
promote the general Welfare, and secure the Blessings of Liberty to ourselves\n\
and our Posterity, do ordain and establish this Constitution for the United States of America.";

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "preamble.txt", PREAMBLE)?;
    create_test_file(&dir, "short.txt", "one two two\nthree three three")?;
    create_test_file(&dir, "empty.txt", "")?;
    create_test_file(&dir, "nested/inner.txt", "Not analyzed")?;

    Ok(dir)
}
