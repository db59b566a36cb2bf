//! Interactive prompts using dialoguer

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};

/// Ask for the base directory, offering `default` on empty input
pub fn prompt_base_dir(default: &Path) -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt("Base directory")
        .default(default.display().to_string())
        .interact_text()?;
    Ok(PathBuf::from(answer.trim()))
}

/// Let the operator pick one of the CSV candidates
pub fn prompt_csv_choice(candidates: &[PathBuf]) -> Result<PathBuf> {
    let items: Vec<String> = candidates.iter().map(|p| display_name(p)).collect();
    let idx = Select::new()
        .with_prompt("Correction CSV to use")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(candidates[idx].clone())
}

/// Pick a CSV without prompting: only a single candidate is unambiguous
pub fn sole_csv_candidate(candidates: &[PathBuf]) -> Result<PathBuf> {
    match candidates {
        [only] => Ok(only.clone()),
        [] => bail!("No CSV files to choose from"),
        _ => bail!(
            "Found {} CSV files ({}); use -c/--csv to choose one when running with --no-confirm",
            candidates.len(),
            candidates
                .iter()
                .map(|p| display_name(p))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Prompt user to confirm applying the renames
pub fn confirm_renames(count: usize) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("Apply {} rename(s)?", count))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
