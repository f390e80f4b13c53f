use chrono::NaiveDate;

/// Totals for one shift or one calendar day of one employee.
///
/// Durations are kept in whole seconds; formatting truncates to whole
/// hours and minutes (see `utils::formatting::secs2hours_minutes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSummary {
    pub date: NaiveDate,
    pub employee_name: String,
    pub total_elapsed_secs: i64,
    pub total_break_secs: i64,
}

impl ShiftSummary {
    /// Elapsed time minus breaks.
    pub fn net_worked_secs(&self) -> i64 {
        self.total_elapsed_secs - self.total_break_secs
    }
}
