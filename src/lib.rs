//! Refolio: PDF folio correction library
//!
//! Reads a CSV correction table, plans the renames of mis-filed PDF folios
//! under a base directory, and applies them without ever overwriting an
//! unrelated file.

pub mod cli;
pub mod error;
pub mod ingest;
pub mod planner;
pub mod report;
pub mod utils;

pub use error::{RefolioError, SchemaError};
pub use ingest::{ingest, CorrectionRecord, Ingested, RowWarning};
pub use planner::{execute, plan, ExecutionReport, Plan, PlanEntry};
