//! Report-text extractor.
//!
//! Time-clock reports interleave date header lines ("DD/MM/YYYY") with
//! record lines holding a user id, an employee name, a punch time and an
//! IN/OUT marker in free-form layout. Lines before the first date header
//! or without an id and a punch time are skipped.

use crate::models::{Direction, PunchEvent};
use crate::utils::{date, time};
use regex::Regex;

/// One raw five-field row, before date+time validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub user_id: String,
    pub name: String,
    pub punch_time: String,
    pub io_type: String,
}

struct Patterns {
    date_header: Regex,
    user_id: Regex,
    punch_time: Regex,
    io_type: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            date_header: Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(),
            user_id: Regex::new(r"\b[A-Za-z0-9]{4,}\b").unwrap(),
            punch_time: Regex::new(r"\d{2}:\d{2}:\d{2}").unwrap(),
            io_type: Regex::new(r"\bIN\b|\bOUT\b").unwrap(),
        }
    }
}

/// Scan report text into raw rows. The current date carries over across
/// lines (and pages) until the next date header.
pub fn extract_rows(text: &str) -> Vec<RawRow> {
    let pat = Patterns::new();
    let mut rows = Vec::new();
    let mut current_date: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(m) = pat.date_header.find(line) {
            current_date = Some(m.as_str().to_string());
            continue;
        }

        let Some(date) = &current_date else {
            continue;
        };

        let Some(id_match) = pat.user_id.find(line) else {
            continue;
        };
        let Some(time_match) = pat.punch_time.find(line) else {
            continue;
        };

        let io_type = pat
            .io_type
            .find(line)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        // The name sits between the user id and the punch time, with any
        // stray IN/OUT token removed.
        let name_start = id_match.end();
        let name_end = time_match.start().max(name_start);
        let name = pat
            .io_type
            .replace_all(&line[name_start..name_end], "")
            .trim()
            .to_string();

        rows.push(RawRow {
            date: date.clone(),
            user_id: id_match.as_str().to_string(),
            name,
            punch_time: time_match.as_str().to_string(),
            io_type,
        });
    }

    rows
}

/// Turn raw rows into punch events, silently dropping rows whose date,
/// time or I/O type does not parse. Returns the events and the number of
/// dropped rows.
pub fn parse_rows(rows: &[RawRow]) -> (Vec<PunchEvent>, usize) {
    let mut events = Vec::with_capacity(rows.len());
    let mut dropped = 0;

    for row in rows {
        let parsed = date::parse_date(&row.date)
            .zip(time::parse_time(&row.punch_time))
            .zip(Direction::from_report_str(&row.io_type));

        match parsed {
            Some(((d, t), io)) => {
                events.push(PunchEvent::new(
                    row.user_id.clone(),
                    row.name.clone(),
                    d,
                    t,
                    io,
                ));
            }
            None => dropped += 1,
        }
    }

    (events, dropped)
}
