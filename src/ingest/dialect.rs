//! CSV dialect detection
//!
//! Correction tables are curated by hand and saved from whatever spreadsheet
//! was at hand, so the delimiter varies between files. A leading sample is
//! inspected to pick the delimiter and quote character.

use std::collections::HashMap;

/// Number of leading bytes inspected when sniffing
pub const SAMPLE_SIZE: usize = 2048;

/// Candidate delimiters, in tie-break preference order
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Share of sample lines that must agree on a delimiter count
const MIN_CONSISTENCY: f64 = 0.9;

/// Delimiter and quoting settings used to read a CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
    /// Trim blanks around fields
    pub trim: bool,
    /// False when the fallback dialect was used
    pub sniffed: bool,
}

impl Dialect {
    /// Human readable delimiter name for display
    pub fn delimiter_name(&self) -> &'static str {
        match self.delimiter {
            b',' => "comma",
            b';' => "semicolon",
            b'\t' => "tab",
            b'|' => "pipe",
            _ => "other",
        }
    }

    /// Build a `csv` reader configured for this dialect
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true)
            .has_headers(true)
            .flexible(true)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });
        builder
    }
}

/// Take the leading sample of a decoded file, floored to a char boundary
pub fn sample_of(text: &str) -> &str {
    if text.len() <= SAMPLE_SIZE {
        return text;
    }
    let mut end = SAMPLE_SIZE;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Detect the dialect of a sample, falling back to a default guess
pub fn detect_dialect(sample: &str) -> Dialect {
    match sniff_dialect(sample) {
        Some(dialect) => {
            tracing::debug!(delimiter = dialect.delimiter_name(), "sniffed CSV dialect");
            dialect
        }
        None => {
            let dialect = fallback_dialect(sample);
            tracing::debug!(
                delimiter = dialect.delimiter_name(),
                "could not sniff CSV dialect, using fallback"
            );
            dialect
        }
    }
}

/// Try to infer the delimiter from per-line counts of each candidate.
///
/// A candidate qualifies when its most common per-line count is non-zero and
/// at least 90% of the sampled lines share it. The most consistent qualifying
/// candidate wins; equal consistency falls back to preference order. Returns
/// `None` when no candidate qualifies.
pub fn sniff_dialect(sample: &str) -> Option<Dialect> {
    let lines = sample_lines(sample);
    if lines.is_empty() {
        return None;
    }

    let quote = detect_quote(sample);

    let mut best: Option<(u8, f64)> = None;
    for delim in CANDIDATE_DELIMITERS {
        let Some(ratio) = consistency(&lines, delim, quote) else {
            continue;
        };
        tracing::trace!(delimiter = %char::from(delim), ratio, "delimiter candidate");
        // Strictly greater keeps the earlier candidate on ties
        if best.map_or(true, |(_, top)| ratio > top) {
            best = Some((delim, ratio));
        }
    }
    let (delimiter, _) = best?;

    let trim = sample
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == delimiter && w[1] == b' ');

    Some(Dialect {
        delimiter,
        quote,
        trim,
        sniffed: true,
    })
}

/// Default dialect: comma if present, else tab, else semicolon
pub fn fallback_dialect(sample: &str) -> Dialect {
    let delimiter = if sample.contains(',') {
        b','
    } else if sample.contains('\t') {
        b'\t'
    } else {
        b';'
    };
    Dialect {
        delimiter,
        quote: b'"',
        trim: true,
        sniffed: false,
    }
}

/// Complete, non-blank lines of the sample.
///
/// When the sample was cut mid-line the trailing fragment is dropped, unless
/// it is the only line available.
fn sample_lines(sample: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = sample.lines().collect();
    if sample.len() == SAMPLE_SIZE && !sample.ends_with('\n') && lines.len() > 1 {
        lines.pop();
    }
    lines.retain(|line| !line.trim().is_empty());
    lines
}

/// Single quotes win only when a field is visibly wrapped in them
fn detect_quote(sample: &str) -> u8 {
    for line in sample.lines() {
        for field in line.split(|c| matches!(c, ',' | ';' | '\t' | '|')) {
            let field = field.trim();
            if field.len() >= 2 && field.starts_with('\'') && field.ends_with('\'') {
                return b'\'';
            }
            if field.starts_with('"') {
                return b'"';
            }
        }
    }
    b'"'
}

/// Share of lines agreeing on the modal count, when that count is non-zero
/// and the share reaches the consistency threshold
fn consistency(lines: &[&str], delimiter: u8, quote: u8) -> Option<f64> {
    let counts: Vec<usize> = lines
        .iter()
        .map(|line| count_unquoted(line, delimiter, quote))
        .collect();
    let (mode, hits) = modal_count(&counts)?;
    let ratio = hits as f64 / counts.len() as f64;
    (mode > 0 && ratio >= MIN_CONSISTENCY).then_some(ratio)
}

fn count_unquoted(line: &str, delimiter: u8, quote: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for &b in line.as_bytes() {
        if b == quote {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

/// Most frequent value and how often it occurs; larger values win ties
fn modal_count(counts: &[usize]) -> Option<(usize, usize)> {
    let mut freq: HashMap<usize, usize> = HashMap::new();
    for &c in counts {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq.into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
}
