//! Punch-table ingestion.
//!
//! Accepts either a CSV punch table (columns located by name, any order,
//! extra columns ignored) or raw report text, which is first run through
//! the extractor. A missing required column rejects the whole batch;
//! rows whose date, time or I/O type fail to parse are dropped one by one.

use crate::core::extract::{self, RawRow};
use crate::errors::{AppError, AppResult};
use crate::models::PunchEvent;
use regex::Regex;
use std::fs;
use std::path::Path;

const REQUIRED: [(&str, &str); 5] = [
    ("Date", r"(?i)\bdate\b"),
    ("User ID", r"(?i)\buser\s*id\b"),
    ("Name", r"(?i)\bname\b"),
    ("Punch Time", r"(?i)\bpunch\s*time\b"),
    ("I/O Type", r"(?i)\bi\s*/\s*o\s*type\b"),
];

/// Locate the five required columns in a CSV header. Returns their
/// indices in `REQUIRED` order, or the list of missing column names.
fn identify_columns(headers: &csv::StringRecord) -> Result<[usize; 5], Vec<&'static str>> {
    let mut indices = [0usize; 5];
    let mut missing = Vec::new();

    for (slot, (label, pattern)) in REQUIRED.iter().enumerate() {
        let re = Regex::new(pattern).unwrap();
        match headers.iter().position(|h| re.is_match(h)) {
            Some(i) => indices[slot] = i,
            None => missing.push(*label),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(missing)
    }
}

/// Read raw punch rows from a CSV file.
pub fn read_csv_rows(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let cols = identify_columns(&headers)
        .map_err(|missing| AppError::MissingColumns(missing.join(", ")))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(cols[i]).unwrap_or("").trim().to_string();
        rows.push(RawRow {
            date: field(0),
            user_id: field(1),
            name: field(2),
            punch_time: field(3),
            io_type: field(4),
        });
    }

    Ok(rows)
}

/// Load raw punch rows from any supported input: `.txt` is treated as
/// extracted report text, anything else as a CSV punch table.
pub fn read_rows(path: &Path) -> AppResult<Vec<RawRow>> {
    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    if is_text {
        let text = fs::read_to_string(path)?;
        Ok(extract::extract_rows(&text))
    } else {
        read_csv_rows(path)
    }
}

/// Load and validate punch events from an input file.
/// Returns the valid events plus the number of dropped (malformed) rows.
pub fn load_events(path: &Path) -> AppResult<(Vec<PunchEvent>, usize)> {
    let rows = read_rows(path)?;
    Ok(extract::parse_rows(&rows))
}
