//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TABLE: Emoji<'_, '_> = Emoji("🧾 ", "");
pub static MODE: Emoji<'_, '_> = Emoji("🛡️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     ___  ___  ___  ___  _     ___  ___
    | _ \| __|| __|/ _ \| |   |_ _|/ _ \
    |   /| _| | _|| (_) | |__  | || (_) |
    |_|_\|___||_|  \___/|____||___|\___/
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Rename mis-filed PDF folios from a correction table").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Width of the value column in the configuration card
const CARD_VALUE_WIDTH: usize = 40;

/// Print configuration card
pub fn print_config(base_dir: &Path, csv_path: &Path, dry_run: bool) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);
    let mode = if dry_run { "preview only" } else { "rename" };

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!("    │  {} Base:  {}│", FOLDER, card_value(&base_dir.display().to_string()));
    println!("    │  {} CSV:   {}│", TABLE, card_value(&csv_path.display().to_string()));
    // Pad before styling so escape codes stay out of the width
    println!("    │  {} Mode:  {}│", MODE, style(card_value(mode)).yellow());
    println!("    └{}┘", line);
    println!();
}

/// Fit a value into the card column: tail-truncated, then padded
fn card_value(value: &str) -> String {
    format!(
        "{:<width$}",
        truncate_string(value, CARD_VALUE_WIDTH - 1),
        width = CARD_VALUE_WIDTH
    )
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!("    {} {}", ROCKET, style("Refolio done!").green().bold());
    println!();
}

/// Print how many correction rows were accepted, noting skipped ones
pub fn print_rows_read(accepted: usize, skipped: usize) {
    match skipped_note(skipped) {
        Some(note) => println!(
            "      Read {} correction row(s) {}",
            style(accepted).yellow().bold(),
            style(note).dim()
        ),
        None => println!(
            "      Read {} correction row(s)",
            style(accepted).yellow().bold()
        ),
    }
}

fn skipped_note(skipped: usize) -> Option<String> {
    (skipped > 0).then(|| format!("({} skipped)", skipped))
}

// Helper functions

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
