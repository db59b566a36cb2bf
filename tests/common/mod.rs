//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use refolio::ingest::CorrectionRecord;

/// Create a temporary base directory containing the given PDF files.
///
/// Each file is written with its own relative path as content so identity
/// can be checked after renames.
pub fn create_base_dir(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for file in files {
        write_file(temp_dir.path(), file);
    }
    temp_dir
}

/// Write a file (and its parent folders) under `base`, content = its path
pub fn write_file(base: &Path, relative: &str) -> PathBuf {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, relative).unwrap();
    path
}

/// Write a CSV file with the given text into `dir`
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Build a correction record the way ingestion would
pub fn record(relative_path: &str, wrong_id: &str, correct_id: &str, line: usize) -> CorrectionRecord {
    CorrectionRecord {
        relative_path: relative_path.to_string(),
        wrong_id: wrong_id.to_string(),
        correct_id: correct_id.to_string(),
        line,
    }
}

/// Read a file under `base` as text
pub fn read(base: &Path, relative: &str) -> String {
    std::fs::read_to_string(base.join(relative)).unwrap()
}

/// Assert that files exist under `base`
pub fn assert_exists(base: &Path, files: &[&str]) {
    for file in files {
        assert!(
            base.join(file).exists(),
            "Expected file to exist: '{}'",
            file
        );
    }
}

/// Assert that files do NOT exist under `base`
pub fn assert_absent(base: &Path, files: &[&str]) {
    for file in files {
        assert!(
            !base.join(file).exists(),
            "Unexpected file still present: '{}'",
            file
        );
    }
}
