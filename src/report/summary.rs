//! Execution summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::planner::{ExecutionRecord, ExecutionReport, Outcome};
use crate::report::preview::file_name;

/// One log line for an executed entry, as printed during execution
pub fn format_record(record: &ExecutionRecord) -> String {
    let from = file_name(&record.source);
    let to = file_name(&record.destination);
    match &record.outcome {
        Outcome::Renamed => format!("{} {} -> {}", style("[RENAMED]").green().bold(), from, to),
        Outcome::AlreadyCorrect => {
            format!("{} {} (name already matches)", style("[OK]").cyan().bold(), from)
        }
        Outcome::Omitted(reason) => format!(
            "{} {} -> {} ({})",
            style("[SKIPPED]").yellow().bold(),
            from,
            to,
            reason
        ),
        Outcome::Failed(detail) => format!("{} {}", style("[ERROR]").red().bold(), detail),
    }
}

/// Print the final totals of an execution
pub fn display_execution_summary(report: &ExecutionReport) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("RESULT").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("✅ Renamed"),
        Cell::new(report.moved)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("👌 Already correct"),
        Cell::new(report.already_correct),
    ]);
    table.add_row(vec![
        Cell::new("⏭️  Skipped"),
        Cell::new(report.skipped).fg(if report.skipped == 0 {
            Color::White
        } else {
            Color::Yellow
        }),
    ]);

    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    let failures: Vec<&ExecutionRecord> = report
        .records
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
        .collect();

    if !failures.is_empty() {
        println!();
        println!(
            "      {} {}:",
            style("Failed renames").red(),
            style(format!("({})", failures.len())).dim()
        );
        for record in failures {
            if let Outcome::Failed(detail) = &record.outcome {
                println!("        {} Row {}: {}", style("•").dim(), record.line, detail);
            }
        }
    }
}
