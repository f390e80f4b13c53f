use super::event::PunchEvent;
use chrono::NaiveDate;

/// One continuous work period for one employee, possibly spanning a
/// calendar midnight. Never empty; events are in non-decreasing
/// timestamp order.
#[derive(Debug, Clone)]
pub struct Shift {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub events: Vec<PunchEvent>,
}

impl Shift {
    pub fn first(&self) -> &PunchEvent {
        &self.events[0]
    }

    pub fn last(&self) -> &PunchEvent {
        &self.events[self.events.len() - 1]
    }
}

/// One row of the organized table: a punch event tagged with the shift
/// boundaries it was attributed to.
#[derive(Debug, Clone)]
pub struct ShiftRow {
    pub date: NaiveDate,
    pub employee_id: String,
    pub employee_name: String,
    pub punch_time: String,
    pub direction: &'static str,
    pub shift_start: NaiveDate,
    pub shift_end: NaiveDate,
}
