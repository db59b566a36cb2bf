//! Command-line argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Refolio - Rename mis-filed PDF folios from a CSV correction table
#[derive(Parser, Debug)]
#[command(name = "refolio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base directory holding the folders and the correction CSVs.
    /// If not provided, it is asked for interactively (defaults to the documents directory).
    #[arg(short, long)]
    pub base_dir: Option<PathBuf>,

    /// Correction CSV with columns path, folio, folio_correcto.
    /// Relative paths are resolved against the base directory.
    /// If not provided, it is picked from the CSV files in the base directory.
    #[arg(short, long)]
    pub csv: Option<PathBuf>,

    /// Show the rename preview without touching any file
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Skip interactive prompts and apply the plan without confirmation
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Increase diagnostic output (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Diagnostic log level selected by `-v`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Resolve the CSV argument against the base directory
    pub fn csv_path(&self, base_dir: &Path) -> Option<PathBuf> {
        let csv = self.csv.as_ref()?;
        Some(if csv.is_absolute() {
            csv.clone()
        } else {
            base_dir.join(csv)
        })
    }
}

/// Everything the workflow needs, resolved from arguments and prompts
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_dir: PathBuf,
    pub csv_path: PathBuf,
    pub dry_run: bool,
    /// Ask before renaming
    pub confirm: bool,
    pub report: Option<PathBuf>,
}

/// Documents directory, else home, else the current directory
pub fn default_base_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
