//! Locating correction tables in the base directory

use std::path::{Path, PathBuf};

use crate::error::{RefolioError, Result};

/// Check that the base directory exists and is a directory
pub fn validate_base_dir(base_dir: &Path) -> Result<()> {
    if base_dir.is_dir() {
        Ok(())
    } else {
        Err(RefolioError::BaseDir {
            path: base_dir.to_path_buf(),
        })
    }
}

/// List CSV files directly inside `base_dir`, sorted by file name.
///
/// The extension match is case-insensitive; subdirectories are not searched.
pub fn list_csv_files(base_dir: &Path) -> Result<Vec<PathBuf>> {
    validate_base_dir(base_dir)?;

    let read_dir = std::fs::read_dir(base_dir).map_err(|source| RefolioError::Io {
        path: base_dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = read_dir
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_csv_file(path))
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Like [`list_csv_files`], but an empty result is an error
pub fn require_csv_files(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let files = list_csv_files(base_dir)?;
    if files.is_empty() {
        return Err(RefolioError::NoCsvFiles {
            base_dir: base_dir.to_path_buf(),
        });
    }
    Ok(files)
}

fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}
