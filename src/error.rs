//! Error types for ingestion and planning.
//!
//! Only conditions that stop a run are errors. Skipped rows, plan conflicts
//! and failed renames are reported as values (`RowWarning`, `EntryStatus`,
//! `Outcome`) so a batch keeps going.

use std::path::PathBuf;

use thiserror::Error;

/// Required CSV columns could not be resolved, even after fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "CSV is missing required column(s): {} (required: {}; found: {})",
    .missing.join(", "),
    .required.join(", "),
    .found.join(", ")
)]
pub struct SchemaError {
    /// Logical columns that could not be resolved
    pub missing: Vec<String>,
    /// All logical columns the tool needs
    pub required: Vec<String>,
    /// Header names as they appear in the file
    pub found: Vec<String>,
}

/// Fatal errors raised before any file is renamed.
#[derive(Debug, Error)]
pub enum RefolioError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("base directory does not exist or is not a directory: {}", .path.display())]
    BaseDir { path: PathBuf },

    #[error("no .csv files found in base directory: {}", .base_dir.display())]
    NoCsvFiles { base_dir: PathBuf },

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RefolioError>;
