//! Correction table loader

use std::fmt;
use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{RefolioError, Result};
use crate::ingest::columns::{
    resolve_columns, ColumnMap, CORRECT_FOLIO_COLUMN, FOLIO_COLUMN, PATH_COLUMN,
};
use crate::ingest::dialect::{detect_dialect, sample_of, Dialect};

/// First data row number; the header occupies row 1
const FIRST_DATA_ROW: usize = 2;

/// One row of the correction table: rename `wrong_id` to `correct_id`
/// inside `relative_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRecord {
    /// Folder relative to the base directory; `/` and `\` both separate
    pub relative_path: String,
    pub wrong_id: String,
    pub correct_id: String,
    /// Row number in the CSV, counting the header as row 1
    pub line: usize,
}

/// Why a data row was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowWarningKind {
    /// A required value is blank
    Incomplete,
    /// The row is too short to contain a mapped column
    MissingField(String),
    /// The CSV reader rejected the row
    Malformed(String),
}

/// A skipped data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    pub line: usize,
    pub kind: RowWarningKind,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RowWarningKind::Incomplete => write!(f, "Row {}: incomplete data; skipped", self.line),
            RowWarningKind::MissingField(column) => {
                write!(f, "Row {}: missing column '{}'; skipped", self.line, column)
            }
            RowWarningKind::Malformed(detail) => {
                write!(f, "Row {}: unreadable row ({}); skipped", self.line, detail)
            }
        }
    }
}

/// Result of ingesting a correction table
#[derive(Debug, Clone)]
pub struct Ingested {
    /// Valid records in file order
    pub records: Vec<CorrectionRecord>,
    pub warnings: Vec<RowWarning>,
    pub dialect: Dialect,
}

/// Load correction records from a CSV file
pub fn ingest(csv_path: &Path) -> Result<Ingested> {
    let bytes = std::fs::read(csv_path).map_err(|source| RefolioError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;
    ingest_str(&decode_csv_bytes(&bytes))
}

/// Load correction records from already decoded CSV text
pub fn ingest_str(text: &str) -> Result<Ingested> {
    let dialect = detect_dialect(sample_of(text));
    let mut reader = dialect.reader_builder().from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(headers.iter())?;

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let line = idx + FIRST_DATA_ROW;
        let warning = match result {
            Ok(row) => match parse_row(&row, &columns, line) {
                Ok(record) => {
                    records.push(record);
                    continue;
                }
                Err(kind) => RowWarning { line, kind },
            },
            Err(e) => RowWarning {
                line,
                kind: RowWarningKind::Malformed(e.to_string()),
            },
        };
        tracing::warn!(line = warning.line, "{}", warning);
        warnings.push(warning);
    }

    tracing::debug!(
        records = records.len(),
        warnings = warnings.len(),
        "ingested correction table"
    );

    Ok(Ingested {
        records,
        warnings,
        dialect,
    })
}

/// Decode raw CSV bytes, removing a UTF-8 BOM.
///
/// Bytes that are not valid UTF-8 are read as Windows-1252, the usual
/// encoding of spreadsheet exports on Windows.
pub fn decode_csv_bytes(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return text.into_owned();
    }
    tracing::debug!("CSV is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

fn parse_row(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    line: usize,
) -> std::result::Result<CorrectionRecord, RowWarningKind> {
    let field = |idx: usize, name: &str| {
        row.get(idx)
            .map(|value| value.trim().to_string())
            .ok_or_else(|| RowWarningKind::MissingField(name.to_string()))
    };

    let relative_path = field(columns.path, PATH_COLUMN)?;
    let wrong_id = field(columns.folio, FOLIO_COLUMN)?;
    let correct_id = field(columns.correct_folio, CORRECT_FOLIO_COLUMN)?;

    if relative_path.is_empty() || wrong_id.is_empty() || correct_id.is_empty() {
        return Err(RowWarningKind::Incomplete);
    }

    Ok(CorrectionRecord {
        relative_path,
        wrong_id,
        correct_id,
        line,
    })
}
