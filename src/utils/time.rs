//! Time utilities: parsing the report's HH:MM:SS convention.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M:%S").ok()
}
