//! Header resolution for the correction table

use std::collections::HashMap;

use crate::error::SchemaError;

pub const PATH_COLUMN: &str = "path";
pub const FOLIO_COLUMN: &str = "folio";
pub const CORRECT_FOLIO_COLUMN: &str = "folio_correcto";

/// Logical columns every correction table must provide
pub const REQUIRED_COLUMNS: [&str; 3] = [PATH_COLUMN, FOLIO_COLUMN, CORRECT_FOLIO_COLUMN];

/// Accepted spellings per logical column, matched after normalization
const SYNONYMS: &[(&str, &[&str])] = &[
    (PATH_COLUMN, &["path"]),
    (FOLIO_COLUMN, &["folio"]),
    (
        CORRECT_FOLIO_COLUMN,
        &["folio_correcto", "folio correcto", "folio-correcto", "foliocorrecto"],
    ),
];

/// Field indices of the required columns within each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub path: usize,
    pub folio: usize,
    pub correct_folio: usize,
}

/// Resolve the required columns from a header row.
///
/// Headers are matched trimmed and case-insensitively first. Columns still
/// missing are matched with spaces, hyphens and underscores stripped, against
/// the synonym table.
pub fn resolve_columns<'a, I>(headers: I) -> Result<ColumnMap, SchemaError>
where
    I: IntoIterator<Item = &'a str>,
{
    let found: Vec<String> = headers.into_iter().map(str::to_string).collect();

    // First occurrence wins for duplicated headers
    let mut direct: HashMap<String, usize> = HashMap::new();
    let mut relaxed: HashMap<String, usize> = HashMap::new();
    for (idx, header) in found.iter().enumerate() {
        let key = header.trim().to_lowercase();
        relaxed.entry(squash(&key)).or_insert(idx);
        direct.entry(key).or_insert(idx);
    }

    let mut resolved: HashMap<&str, usize> = HashMap::new();
    let mut missing = Vec::new();

    for required in REQUIRED_COLUMNS {
        let idx = direct.get(required).copied().or_else(|| {
            synonyms_for(required)
                .iter()
                .find_map(|candidate| relaxed.get(&squash(candidate)).copied())
        });
        match idx {
            Some(idx) => {
                tracing::debug!(column = required, header = %found[idx], "resolved CSV column");
                resolved.insert(required, idx);
            }
            None => missing.push(required.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(SchemaError {
            missing,
            required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found,
        });
    }

    Ok(ColumnMap {
        path: resolved[PATH_COLUMN],
        folio: resolved[FOLIO_COLUMN],
        correct_folio: resolved[CORRECT_FOLIO_COLUMN],
    })
}

fn synonyms_for(column: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

/// Lower-case and drop the separators people use inconsistently in headers
fn squash(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect()
}
