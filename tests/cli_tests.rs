//! End-to-end CLI flows: extract, organize, summarize.

mod common;
use common::{DAY_CSV, NIGHT_CSV, plg, temp_path, write_csv, write_report};

use predicates::prelude::*;
use std::fs;

const REPORT: &str = "\
Attendance Report - Week 1
01/01/2024
EMP001 Alice Smith 09:00:00 IN
EMP001 Alice Smith 17:30:00 OUT
02/01/2024
EMP001 Alice Smith 09:15:00 IN
EMP001 Alice Smith 16:45:00 OUT
";

#[test]
fn extract_report_to_csv() {
    let report = write_report("extract_csv", REPORT);
    let out = temp_path("extract_csv_out", "csv");

    plg()
        .args(["extract", &report, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read extracted csv");
    assert!(content.starts_with("Date,User ID,Name,Punch Time,I/O Type"));
    assert!(content.contains("01/01/2024,EMP001,Alice Smith,09:00:00,IN"));
    assert!(content.contains("02/01/2024,EMP001,Alice Smith,16:45:00,OUT"));
}

#[test]
fn extract_renders_to_stdout_without_file() {
    let report = write_report("extract_stdout", REPORT);

    plg()
        .args(["extract", &report])
        .assert()
        .success()
        .stdout(predicate::str::contains("Punch Time"))
        .stdout(predicate::str::contains("EMP001"));
}

#[test]
fn organize_tags_shift_boundaries() {
    let input = write_csv("organize_night", NIGHT_CSV);
    let out = temp_path("organize_night_out", "csv");

    plg()
        .args(["organize", &input, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read organized csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,User ID,Name,Punch Time,I/O Type,Shift Start,Shift End"
    );
    assert_eq!(
        lines.next().unwrap(),
        "01/01/2024,EMP003,Carol Diaz,19:00:00,IN,01/01/2024,02/01/2024"
    );
    assert_eq!(
        lines.next().unwrap(),
        "02/01/2024,EMP003,Carol Diaz,03:00:00,OUT,01/01/2024,02/01/2024"
    );
}

#[test]
fn organize_accepts_report_text_directly() {
    let report = write_report("organize_report", REPORT);
    let out = temp_path("organize_report_out", "csv");

    plg()
        .args(["organize", &report, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read organized csv");
    assert_eq!(content.lines().count(), 5); // header + 4 punches
}

#[test]
fn organize_rejects_missing_columns() {
    let input = write_csv(
        "organize_missing_cols",
        "Date,Name,Punch Time\n01/01/2024,Alice,09:00:00\n",
    );

    plg()
        .args(["organize", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required columns"));
}

#[test]
fn organize_warns_about_dropped_rows() {
    let csv = format!("{DAY_CSV}not-a-date,EMP001,Alice Smith,23:00:00,OUT\n");
    let input = write_csv("organize_dropped", &csv);

    plg()
        .args(["organize", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped 1 row(s)"));
}

#[test]
fn organize_drops_ragged_rows_without_aborting() {
    let csv = format!("{DAY_CSV}01/01/2024,EMP001\n");
    let input = write_csv("organize_ragged", &csv);

    plg()
        .args(["organize", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped 1 row(s)"));
}

#[test]
fn summarize_night_shift() {
    let input = write_csv("summarize_night", NIGHT_CSV);
    let out = temp_path("summarize_night_out", "csv");

    plg()
        .args([
            "summarize", &input, "--mode", "night", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read summary csv");
    assert!(content.starts_with("Date,Name,Total Elapsed,Break Time,Net Hours Worked"));
    assert!(content.contains(
        "01/01/2024,Carol Diaz,\"8 hours, 0 minutes\",\"0 hours, 0 minutes\",\"8 hours, 0 minutes\""
    ));
}

#[test]
fn summarize_morning_mode_per_day() {
    let input = write_csv("summarize_morning", DAY_CSV);
    let out = temp_path("summarize_morning_out", "csv");

    plg()
        .args([
            "summarize", &input, "--mode", "morning", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read summary csv");
    assert!(content.contains("Alice Smith"));
    assert!(content.contains("\"7 hours, 0 minutes\""));
    assert!(content.contains("Bob Jones"));
    assert!(content.contains("\"8 hours, 0 minutes\""));
}

#[test]
fn summarize_empty_input_produces_empty_output() {
    let input = write_csv("summarize_empty", "Date,User ID,Name,Punch Time,I/O Type\n");
    let out = temp_path("summarize_empty_out", "csv");

    plg()
        .args([
            "summarize", &input, "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read summary csv");
    assert_eq!(content.lines().count(), 1); // header only
}

#[test]
fn force_overwrites_existing_output() {
    let input = write_csv("force_overwrite", DAY_CSV);
    let out = temp_path("force_overwrite_out", "csv");
    fs::write(&out, "stale").expect("seed stale output");

    plg()
        .args([
            "organize", &input, "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read organized csv");
    assert!(content.contains("Shift Start"));
}
