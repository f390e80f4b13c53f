use chrono::NaiveTime;

/// Time-of-day cutoffs that drive shift reconstruction.
///
/// A punch at or after `evening_threshold` belongs to the night window;
/// a punch at or before `night_end_threshold` is a rollover into the
/// next calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPolicy {
    pub evening_threshold: NaiveTime,
    pub night_end_threshold: NaiveTime,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            evening_threshold: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            night_end_threshold: NaiveTime::from_hms_opt(2, 15, 0).unwrap(),
        }
    }
}

impl ShiftPolicy {
    pub fn is_evening(&self, t: NaiveTime) -> bool {
        t >= self.evening_threshold
    }

    pub fn is_night_end(&self, t: NaiveTime) -> bool {
        t <= self.night_end_threshold
    }
}
