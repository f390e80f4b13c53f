// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Try to interpret a cell string as a date or time-of-day, returning the
/// Excel serial plus a number format. Report conventions first
/// (DD/MM/YYYY, HH:MM:SS), ISO as fallback.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let date_formats = [("%d/%m/%Y", "dd/mm/yyyy"), ("%Y-%m-%d", "yyyy-mm-dd")];

    for (fmt, num_format) in date_formats.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0).unwrap();
            return Some((num_format, naive_datetime_to_excel_serial(&dt)));
        }
    }

    let time_formats = ["%H:%M:%S", "%H:%M"];

    for fmt in time_formats.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            let seconds = t.num_seconds_from_midnight() as f64;
            return Some(("hh:mm:ss", seconds / 86400.0));
        }
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_date_is_recognized() {
        let (fmt, serial) = parse_to_excel_date("01/01/2024").unwrap();
        assert_eq!(fmt, "dd/mm/yyyy");
        assert!(serial > 45000.0);
    }

    #[test]
    fn punch_time_is_a_day_fraction() {
        let (fmt, serial) = parse_to_excel_date("12:00:00").unwrap();
        assert_eq!(fmt, "hh:mm:ss");
        assert!((serial - 0.5).abs() < 1e-9);
    }

    #[test]
    fn durations_are_not_dates() {
        assert!(parse_to_excel_date("8 hours, 0 minutes").is_none());
    }
}
