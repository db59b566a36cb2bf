//! Progress indicators using indicatif

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the correction table is read
pub fn create_spinner(message: &str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("    {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let pb = ProgressBar::new_spinner().with_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Bar counting processed plan entries
pub fn create_rename_bar(entries: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("    {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");

    let pb = ProgressBar::new(entries as u64).with_style(style);
    pb.set_message("Renaming");
    pb
}

/// Finish a spinner or bar with a success message
pub fn finish_with_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✅ {}", message));
}

/// Finish the rename bar, flagging skipped entries
pub fn finish_rename_bar(pb: &ProgressBar, skipped: usize) {
    if skipped == 0 {
        finish_with_success(pb, "All entries processed");
    } else {
        pb.finish_with_message(format!("⚠️  {} entry(ies) skipped", skipped));
    }
}
