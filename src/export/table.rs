// src/export/table.rs

use crate::core::extract::RawRow;
use crate::models::{ShiftRow, ShiftSummary};
use crate::utils::date::format_date;
use crate::utils::formatting::secs2hours_minutes;

/// A named tabular artifact ready for export: headers plus string rows.
/// The name becomes the XLSX worksheet name.
#[derive(Debug, Clone)]
pub struct TableData {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Five-column punch table, as extracted from report text.
pub fn punch_table(rows: &[RawRow]) -> TableData {
    TableData {
        name: "Sheet1".to_string(),
        headers: vec!["Date", "User ID", "Name", "Punch Time", "I/O Type"],
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.user_id.clone(),
                    r.name.clone(),
                    r.punch_time.clone(),
                    r.io_type.clone(),
                ]
            })
            .collect(),
    }
}

/// Organized table: one row per punch, tagged with shift boundaries.
pub fn organized_table(rows: &[ShiftRow]) -> TableData {
    TableData {
        name: "OrganizedData".to_string(),
        headers: vec![
            "Date",
            "User ID",
            "Name",
            "Punch Time",
            "I/O Type",
            "Shift Start",
            "Shift End",
        ],
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    format_date(r.date),
                    r.employee_id.clone(),
                    r.employee_name.clone(),
                    r.punch_time.clone(),
                    r.direction.to_string(),
                    format_date(r.shift_start),
                    format_date(r.shift_end),
                ]
            })
            .collect(),
    }
}

/// Summary table: one row per shift or day.
pub fn summary_table(name: &str, summaries: &[ShiftSummary]) -> TableData {
    TableData {
        name: name.to_string(),
        headers: vec![
            "Date",
            "Name",
            "Total Elapsed",
            "Break Time",
            "Net Hours Worked",
        ],
        rows: summaries
            .iter()
            .map(|s| {
                vec![
                    format_date(s.date),
                    s.employee_name.clone(),
                    secs2hours_minutes(s.total_elapsed_secs),
                    secs2hours_minutes(s.total_break_secs),
                    secs2hours_minutes(s.net_worked_secs()),
                ]
            })
            .collect(),
    }
}
