//! Applying planned renames

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::planner::paths::{is_occupied, same_entity};
use crate::planner::plan::{EntryStatus, PlanEntry};

/// Why an entry was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OmitReason {
    MissingSource,
    Conflict,
    DuplicateDestination,
    /// An earlier row performs the same rename
    RepeatedRow,
    /// The destination appeared after planning
    DestinationAppeared,
}

impl fmt::Display for OmitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OmitReason::MissingSource => "source not found",
            OmitReason::Conflict => "destination exists",
            OmitReason::DuplicateDestination => "another row targets the same destination",
            OmitReason::RepeatedRow => "repeats an earlier row",
            OmitReason::DestinationAppeared => "destination appeared after planning",
        };
        f.write_str(text)
    }
}

/// What happened to one plan entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Renamed,
    AlreadyCorrect,
    Omitted(OmitReason),
    /// The rename itself failed; carries the OS error text
    Failed(String),
}

/// Log line for one executed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRecord {
    pub line: usize,
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Totals and per-entry log of an execution
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionReport {
    pub moved: usize,
    /// Omitted entries plus failed renames
    pub skipped: usize,
    pub already_correct: usize,
    pub records: Vec<ExecutionRecord>,
}

impl ExecutionReport {
    fn push(&mut self, record: ExecutionRecord) {
        match &record.outcome {
            Outcome::Renamed => self.moved += 1,
            Outcome::AlreadyCorrect => self.already_correct += 1,
            Outcome::Omitted(_) | Outcome::Failed(_) => self.skipped += 1,
        }
        self.records.push(record);
    }
}

/// Execute every plan entry in order
pub fn execute(entries: Vec<PlanEntry>) -> ExecutionReport {
    execute_with(entries, |_| {})
}

/// Execute every plan entry in order, reporting each result to `observer`.
///
/// A failed or omitted entry never stops the batch. Nothing already renamed
/// is rolled back.
pub fn execute_with<F>(entries: Vec<PlanEntry>, mut observer: F) -> ExecutionReport
where
    F: FnMut(&ExecutionRecord),
{
    let mut report = ExecutionReport::default();

    for entry in entries {
        let outcome = apply(&entry);
        let record = ExecutionRecord {
            line: entry.line,
            source: entry.source,
            destination: entry.destination,
            outcome,
        };
        observer(&record);
        report.push(record);
    }

    report
}

fn apply(entry: &PlanEntry) -> Outcome {
    match entry.status {
        EntryStatus::MissingSource { .. } => return Outcome::Omitted(OmitReason::MissingSource),
        EntryStatus::Conflict => return Outcome::Omitted(OmitReason::Conflict),
        EntryStatus::DuplicateDestination => {
            return Outcome::Omitted(OmitReason::DuplicateDestination)
        }
        EntryStatus::RepeatedRow { .. } => return Outcome::Omitted(OmitReason::RepeatedRow),
        EntryStatus::Ready | EntryStatus::AlreadyCorrect => {}
    }

    if same_entity(&entry.source, &entry.destination) {
        return Outcome::AlreadyCorrect;
    }

    // Plans are not revalidated atomically; never overwrite what showed up since
    if is_occupied(&entry.destination) {
        tracing::warn!(
            line = entry.line,
            destination = %entry.destination.display(),
            "destination appeared after planning"
        );
        return Outcome::Omitted(OmitReason::DestinationAppeared);
    }

    match std::fs::rename(&entry.source, &entry.destination) {
        Ok(()) => Outcome::Renamed,
        Err(e) => {
            tracing::warn!(line = entry.line, error = %e, "rename failed");
            Outcome::Failed(format!(
                "{} -> {}: {}",
                entry.source.display(),
                entry.destination.display(),
                e
            ))
        }
    }
}
