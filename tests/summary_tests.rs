//! Duration calculation over reconstructed windows, including malformed
//! row handling on the ingestion side.

mod common;
use common::{DAY_CSV, write_csv};

use chrono::{NaiveDate, NaiveTime};
use punchlog::core::{ShiftPolicy, SummaryMode, input, summarize, summarize_window};
use punchlog::models::{Direction, PunchEvent};
use punchlog::utils::secs2hours_minutes;
use std::path::Path;

fn ev(date: &str, time: &str, dir: Direction) -> PunchEvent {
    PunchEvent::new(
        "EMP001",
        "Alice Smith",
        NaiveDate::parse_from_str(date, "%d/%m/%Y").unwrap(),
        NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
        dir,
    )
}

#[test]
fn shift_with_lunch_break() {
    let summary = summarize_window(&[
        ev("01/01/2024", "09:00:00", Direction::In),
        ev("01/01/2024", "12:00:00", Direction::Out),
        ev("01/01/2024", "13:00:00", Direction::In),
        ev("01/01/2024", "17:00:00", Direction::Out),
    ])
    .expect("non-empty window");

    assert_eq!(secs2hours_minutes(summary.total_elapsed_secs), "8 hours, 0 minutes");
    assert_eq!(secs2hours_minutes(summary.total_break_secs), "1 hours, 0 minutes");
    assert_eq!(secs2hours_minutes(summary.net_worked_secs()), "7 hours, 0 minutes");
}

#[test]
fn empty_window_is_skipped_not_zero_filled() {
    assert!(summarize_window(&[]).is_none());
    let summaries = summarize(&[], SummaryMode::Night, &ShiftPolicy::default());
    assert!(summaries.is_empty());
}

#[test]
fn night_mode_spans_midnight() {
    let summaries = summarize(
        &[
            ev("01/01/2024", "19:00:00", Direction::In),
            ev("02/01/2024", "03:00:00", Direction::Out),
        ],
        SummaryMode::Night,
        &ShiftPolicy::default(),
    );

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_elapsed_secs, 8 * 3600);
    assert_eq!(summaries[0].total_break_secs, 0);
}

#[test]
fn seconds_are_truncated_not_rounded() {
    let summaries = summarize(
        &[
            ev("01/01/2024", "09:00:10", Direction::In),
            ev("01/01/2024", "17:00:05", Direction::Out),
        ],
        SummaryMode::Morning,
        &ShiftPolicy::default(),
    );

    // 7h 59m 55s reports as 7 hours, 59 minutes
    assert_eq!(
        secs2hours_minutes(summaries[0].total_elapsed_secs),
        "7 hours, 59 minutes"
    );
}

#[test]
fn malformed_rows_are_dropped_from_counts_and_durations() {
    let csv = format!("{DAY_CSV}bad-date,EMP001,Alice Smith,23:00:00,OUT\n");
    let path = write_csv("malformed_rows", &csv);

    let (events, dropped) = input::load_events(Path::new(&path)).expect("load events");
    assert_eq!(dropped, 1);
    assert_eq!(events.len(), 6);

    let summaries = summarize(&events, SummaryMode::Morning, &ShiftPolicy::default());
    // Alice: 8h elapsed with 1h break; Bob: 8h straight.
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].employee_name, "Alice Smith");
    assert_eq!(summaries[0].net_worked_secs(), 7 * 3600);
    assert_eq!(summaries[1].employee_name, "Bob Jones");
    assert_eq!(summaries[1].total_elapsed_secs, 8 * 3600);
}

#[test]
fn missing_columns_reject_the_batch() {
    let path = write_csv(
        "missing_columns",
        "Date,Name,Punch Time\n01/01/2024,Alice,09:00:00\n",
    );
    let err = input::load_events(Path::new(&path)).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("required columns"));
    assert!(msg.contains("User ID"));
    assert!(msg.contains("I/O Type"));
}
