//! Rename preview rendering

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::planner::{EntryStatus, Plan, PlanEntry};

/// Print every planned rename followed by the plan counts
pub fn display_preview(plan: &Plan) {
    println!();
    println!(
        "    {} {}",
        style("🔎").cyan(),
        style("RENAME PREVIEW").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Row").add_attribute(Attribute::Bold),
        Cell::new("Folder").add_attribute(Attribute::Bold),
        Cell::new("From").add_attribute(Attribute::Bold),
        Cell::new("To").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
    ]);

    for entry in &plan.entries {
        table.add_row(vec![
            Cell::new(entry.line),
            Cell::new(folder_of(entry)),
            Cell::new(file_name(&entry.source)),
            Cell::new(file_name(&entry.destination)),
            Cell::new(entry.status).fg(status_color(&entry.status)),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    display_plan_counts(plan);
}

/// Print the aggregate counts of a plan
pub fn display_plan_counts(plan: &Plan) {
    let counts = &plan.counts;

    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("📄 Sources found"),
        Cell::new(counts.found).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("❓ Sources missing"),
        Cell::new(counts.missing).fg(if counts.missing == 0 {
            Color::White
        } else {
            Color::Yellow
        }),
    ]);
    table.add_row(vec![
        Cell::new("⚠️  Destination conflicts"),
        Cell::new(counts.conflicts).fg(if counts.conflicts == 0 {
            Color::White
        } else {
            Color::Red
        }),
    ]);
    table.add_row(vec![
        Cell::new("✅ Ready to rename"),
        Cell::new(counts.ready)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("👌 Already correct"),
        Cell::new(counts.already_correct),
    ]);
    if counts.repeated > 0 {
        table.add_row(vec![
            Cell::new("🔁 Repeated rows"),
            Cell::new(counts.repeated).fg(Color::Yellow),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    if counts.conflicts > 0 {
        println!(
            "      {}",
            style("Conflicting entries are skipped; existing files are never overwritten.").dim()
        );
    }
}

pub(crate) fn status_color(status: &EntryStatus) -> Color {
    match status {
        EntryStatus::Ready => Color::Green,
        EntryStatus::AlreadyCorrect => Color::Cyan,
        EntryStatus::MissingSource { .. } | EntryStatus::RepeatedRow { .. } => Color::Yellow,
        EntryStatus::Conflict | EntryStatus::DuplicateDestination => Color::Red,
    }
}

fn folder_of(entry: &PlanEntry) -> String {
    entry
        .source
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

pub(crate) fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
