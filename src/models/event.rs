use super::direction::Direction;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One clock action as extracted from the time-clock report.
///
/// `date` is the calendar date attached to the raw record; shift
/// reconstruction may advance it by one day for punches that roll past
/// midnight (see `core::reconstruct`).
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,      // report column "Date" ("DD/MM/YYYY")
    pub time: NaiveTime,      // report column "Punch Time" ("HH:MM:SS")
    pub direction: Direction, // report column "I/O Type" ('IN' | 'OUT')
}

impl PunchEvent {
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        direction: Direction,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            date,
            time,
            direction,
        }
    }

    /// Combined timestamp, used for chronological ordering and arithmetic.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
