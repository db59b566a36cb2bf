//! JSON report export

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::planner::{ExecutionRecord, ExecutionReport, Plan, PlanCounts, PlanEntry};

/// Metadata about the run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (RFC 3339)
    pub timestamp: String,
    /// Refolio version
    pub version: String,
    pub base_dir: String,
    pub csv_file: String,
    pub dry_run: bool,
}

impl RunMetadata {
    pub fn new(base_dir: &Path, csv_file: &Path, dry_run: bool) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            base_dir: base_dir.display().to_string(),
            csv_file: csv_file.display().to_string(),
            dry_run,
        }
    }
}

/// Totals of an executed run
#[derive(Serialize)]
pub struct ExecutionTotals {
    pub moved: usize,
    pub skipped: usize,
    pub already_correct: usize,
}

/// Report written after executing a plan
#[derive(Serialize)]
pub struct ExecutionExport<'a> {
    pub metadata: RunMetadata,
    pub summary: ExecutionTotals,
    pub entries: &'a [ExecutionRecord],
}

/// Report written for a dry run, carrying the planned statuses
#[derive(Serialize)]
pub struct PlanExport<'a> {
    pub metadata: RunMetadata,
    pub summary: PlanCounts,
    pub entries: &'a [PlanEntry],
}

/// Write the execution report as pretty JSON
pub fn export_execution_report(
    report: &ExecutionReport,
    metadata: RunMetadata,
    output_path: &Path,
) -> Result<()> {
    let export = ExecutionExport {
        metadata,
        summary: ExecutionTotals {
            moved: report.moved,
            skipped: report.skipped,
            already_correct: report.already_correct,
        },
        entries: &report.records,
    };
    write_json(&export, output_path)
}

/// Write the plan of a dry run as pretty JSON
pub fn export_plan_report(plan: &Plan, metadata: RunMetadata, output_path: &Path) -> Result<()> {
    let export = PlanExport {
        metadata,
        summary: plan.counts,
        entries: &plan.entries,
    };
    write_json(&export, output_path)
}

fn write_json<T: Serialize>(value: &T, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{EntryStatus, OmitReason, Outcome};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn execution_report_serializes_outcomes() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.json");
        let report = ExecutionReport {
            moved: 1,
            skipped: 1,
            already_correct: 0,
            records: vec![
                ExecutionRecord {
                    line: 2,
                    source: PathBuf::from("/base/a.pdf"),
                    destination: PathBuf::from("/base/b.pdf"),
                    outcome: Outcome::Renamed,
                },
                ExecutionRecord {
                    line: 3,
                    source: PathBuf::from("/base/c.pdf"),
                    destination: PathBuf::from("/base/d.pdf"),
                    outcome: Outcome::Omitted(OmitReason::Conflict),
                },
            ],
        };

        let metadata = RunMetadata::new(Path::new("/base"), Path::new("/base/fix.csv"), false);
        export_execution_report(&report, metadata, &output).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["summary"]["moved"], 1);
        assert_eq!(json["metadata"]["dry_run"], false);
        assert_eq!(json["entries"][0]["outcome"], "renamed");
        assert_eq!(json["entries"][1]["outcome"], "omitted");
        assert_eq!(json["entries"][1]["detail"], "conflict");
    }

    #[test]
    fn plan_report_serializes_statuses() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("plan.json");
        let plan = Plan {
            entries: vec![PlanEntry {
                line: 2,
                source: PathBuf::from("/base/a.pdf"),
                destination: PathBuf::from("/base/b.pdf"),
                status: EntryStatus::MissingSource {
                    destination_present: true,
                },
            }],
            counts: PlanCounts {
                missing: 1,
                ..Default::default()
            },
        };

        let metadata = RunMetadata::new(Path::new("/base"), Path::new("/base/fix.csv"), true);
        export_plan_report(&plan, metadata, &output).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["summary"]["missing"], 1);
        assert_eq!(json["entries"][0]["status"], "missing_source");
        assert_eq!(json["entries"][0]["destination_present"], true);
    }
}
