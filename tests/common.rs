#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plg() -> Command {
    cargo_bin_cmd!("punchlog")
}

/// Create a unique temp file path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a punch-table CSV fixture and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// Write a report-text fixture and return its path
pub fn write_report(name: &str, content: &str) -> String {
    let path = temp_path(name, "txt");
    fs::write(&path, content).expect("write report fixture");
    path
}

/// A small day-shift dataset: two employees, one day, lunch breaks
pub const DAY_CSV: &str = "\
Date,User ID,Name,Punch Time,I/O Type
01/01/2024,EMP001,Alice Smith,09:00:00,IN
01/01/2024,EMP001,Alice Smith,12:00:00,OUT
01/01/2024,EMP001,Alice Smith,13:00:00,IN
01/01/2024,EMP001,Alice Smith,17:00:00,OUT
01/01/2024,EMP002,Bob Jones,10:00:00,IN
01/01/2024,EMP002,Bob Jones,18:00:00,OUT
";

/// A midnight-crossing night shift
pub const NIGHT_CSV: &str = "\
Date,User ID,Name,Punch Time,I/O Type
01/01/2024,EMP003,Carol Diaz,19:00:00,IN
02/01/2024,EMP003,Carol Diaz,03:00:00,OUT
";
