//! Rename planning and safety classification

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::ingest::CorrectionRecord;
use crate::planner::paths::{ensure_pdf_suffix, is_occupied, resolve_path, same_entity, split_relative};

/// Safety classification of a planned rename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    /// Source exists and the destination is free
    Ready,
    /// Source and destination are already the same file
    AlreadyCorrect,
    /// Source file not found. `destination_present` hints that the rename
    /// may have been applied in an earlier run.
    MissingSource { destination_present: bool },
    /// Destination is occupied by a different file
    Conflict,
    /// Another entry in the plan moves a different file onto the same destination
    DuplicateDestination,
    /// An earlier row already performs this exact rename
    RepeatedRow { first_line: usize },
}

impl EntryStatus {
    pub fn is_executable(&self) -> bool {
        matches!(self, EntryStatus::Ready | EntryStatus::AlreadyCorrect)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            EntryStatus::Conflict | EntryStatus::DuplicateDestination
        )
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Ready => write!(f, "ready"),
            EntryStatus::AlreadyCorrect => write!(f, "already correct"),
            EntryStatus::MissingSource {
                destination_present: true,
            } => write!(f, "source missing (destination already present)"),
            EntryStatus::MissingSource { .. } => write!(f, "source missing"),
            EntryStatus::Conflict => write!(f, "destination exists (conflict)"),
            EntryStatus::DuplicateDestination => write!(f, "duplicate destination"),
            EntryStatus::RepeatedRow { first_line } => write!(f, "repeats row {}", first_line),
        }
    }
}

/// One planned rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    /// CSV row this entry came from
    pub line: usize,
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl PlanEntry {
    pub fn is_executable(&self) -> bool {
        self.status.is_executable()
    }
}

/// Aggregate counts for the preview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanCounts {
    /// Entries whose source file exists
    pub found: usize,
    pub missing: usize,
    /// Occupied or duplicated destinations
    pub conflicts: usize,
    pub ready: usize,
    pub already_correct: usize,
    /// Rows repeating an earlier rename of the same file
    pub repeated: usize,
}

impl PlanCounts {
    fn tally(entries: &[PlanEntry]) -> Self {
        let mut counts = PlanCounts::default();
        for entry in entries {
            match entry.status {
                EntryStatus::MissingSource { .. } => counts.missing += 1,
                status => {
                    counts.found += 1;
                    match status {
                        EntryStatus::Ready => counts.ready += 1,
                        EntryStatus::AlreadyCorrect => counts.already_correct += 1,
                        EntryStatus::RepeatedRow { .. } => counts.repeated += 1,
                        _ => counts.conflicts += 1,
                    }
                }
            }
        }
        counts
    }
}

/// Ordered plan entries plus their counts
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub entries: Vec<PlanEntry>,
    pub counts: PlanCounts,
}

impl Plan {
    pub fn executable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_executable()).count()
    }
}

/// Build a rename plan for `records` under `base_dir`.
///
/// Each entry is classified against the current filesystem state; entries
/// that would move different files onto the same destination are then
/// marked as duplicates so none of them runs. Rows that repeat the rename of
/// an earlier row keep only the first one.
pub fn plan(base_dir: &Path, records: &[CorrectionRecord]) -> Plan {
    let mut entries: Vec<PlanEntry> = records
        .iter()
        .map(|record| plan_entry(base_dir, record))
        .collect();

    mark_duplicate_destinations(&mut entries);

    let counts = PlanCounts::tally(&entries);
    Plan { entries, counts }
}

fn plan_entry(base_dir: &Path, record: &CorrectionRecord) -> PlanEntry {
    let folder = resolve_path(&base_dir.join(split_relative(&record.relative_path)));
    let source = folder.join(ensure_pdf_suffix(&record.wrong_id));
    let destination = folder.join(ensure_pdf_suffix(&record.correct_id));
    let status = classify(&source, &destination);

    tracing::debug!(
        line = record.line,
        source = %source.display(),
        destination = %destination.display(),
        %status,
        "planned rename"
    );

    PlanEntry {
        line: record.line,
        source,
        destination,
        status,
    }
}

fn classify(source: &Path, destination: &Path) -> EntryStatus {
    if !source.exists() {
        EntryStatus::MissingSource {
            destination_present: is_occupied(destination),
        }
    } else if same_entity(source, destination) {
        EntryStatus::AlreadyCorrect
    } else if is_occupied(destination) {
        EntryStatus::Conflict
    } else {
        EntryStatus::Ready
    }
}

fn mark_duplicate_destinations(entries: &mut [PlanEntry]) {
    let mut claims: HashMap<PathBuf, Vec<usize>> = HashMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        if entry.status == EntryStatus::Ready {
            claims.entry(entry.destination.clone()).or_default().push(idx);
        }
    }

    for indices in claims.into_values().filter(|group| group.len() > 1) {
        let sources: HashSet<PathBuf> = indices
            .iter()
            .map(|&idx| source_identity(&entries[idx].source))
            .collect();

        if sources.len() > 1 {
            for &idx in &indices {
                tracing::debug!(line = entries[idx].line, "destination claimed by several files");
                entries[idx].status = EntryStatus::DuplicateDestination;
            }
        } else {
            // Indices are in row order
            let first_line = entries[indices[0]].line;
            for &idx in &indices[1..] {
                tracing::debug!(line = entries[idx].line, first_line, "row repeats an earlier rename");
                entries[idx].status = EntryStatus::RepeatedRow { first_line };
            }
        }
    }
}

fn source_identity(source: &Path) -> PathBuf {
    fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf())
}
