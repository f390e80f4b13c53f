//! Duration calculation.
//!
//! One forward pass over a chronologically ordered window of punches
//! computes the elapsed time from first login to last logout, the break
//! time (gaps between a logout and the next login), and the net worked
//! time. The same calculation serves two windowings: one window per
//! reconstructed shift ("night" mode) or one window per employee and
//! attributed calendar day ("morning" mode).

use crate::core::policy::ShiftPolicy;
use crate::core::reconstruct::reconstruct;
use crate::models::{PunchEvent, ShiftSummary};
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryMode {
    /// One summary per employee and calendar day.
    Morning,
    /// One summary per reconstructed shift.
    Night,
}

/// Summarize one window of chronologically ordered punches.
/// Returns None for an empty window; the caller skips it.
pub fn summarize_window(events: &[PunchEvent]) -> Option<ShiftSummary> {
    let first = events.first()?;

    let mut first_login: Option<NaiveDateTime> = None;
    let mut last_logout: Option<NaiveDateTime> = None;
    let mut in_time: Option<NaiveDateTime> = None;
    let mut prev_out: Option<NaiveDateTime> = None;
    let mut total_break_secs = 0i64;

    for ev in events {
        let ts = ev.timestamp();
        if ev.direction.is_in() {
            if first_login.is_none() {
                first_login = Some(ts);
            }
            if let Some(out) = prev_out
                && out < ts
            {
                total_break_secs += (ts - out).num_seconds();
            }
            in_time = Some(ts);
        } else if in_time.is_some() {
            // An OUT with no preceding IN in this window does not close
            // a work period.
            last_logout = Some(ts);
            prev_out = Some(ts);
        }
    }

    let total_elapsed_secs = match (first_login, last_logout) {
        (Some(login), Some(logout)) => (logout - login).num_seconds(),
        _ => 0,
    };

    Some(ShiftSummary {
        date: first.date,
        employee_name: first.employee_name.clone(),
        total_elapsed_secs,
        total_break_secs,
    })
}

/// Run the full pipeline: reconstruct shifts, then summarize one window
/// per shift (night mode) or per employee and day (morning mode).
/// Employees and dates keep the order they first appear in the organized
/// data.
pub fn summarize(
    events: &[PunchEvent],
    mode: SummaryMode,
    policy: &ShiftPolicy,
) -> Vec<ShiftSummary> {
    let shifts = reconstruct(events, policy);

    match mode {
        SummaryMode::Night => shifts
            .iter()
            .filter_map(|s| summarize_window(&s.events))
            .collect(),
        SummaryMode::Morning => {
            let windows = day_windows(shifts.iter().flat_map(|s| s.events.iter()));
            windows
                .into_iter()
                .filter_map(|(_, events)| summarize_window(&events))
                .collect()
        }
    }
}

type DayKey = (String, NaiveDate);

/// Group events by (employee id, attributed date), preserving first-seen
/// order of both keys. Each window is kept chronological.
fn day_windows<'a>(events: impl Iterator<Item = &'a PunchEvent>) -> Vec<(DayKey, Vec<PunchEvent>)> {
    let mut windows: Vec<(DayKey, Vec<PunchEvent>)> = Vec::new();

    for ev in events {
        let key = (ev.employee_id.clone(), ev.date);
        match windows.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(ev.clone()),
            None => windows.push((key, vec![ev.clone()])),
        }
    }

    for (_, bucket) in &mut windows {
        bucket.sort_by_key(|e| e.timestamp());
    }

    windows
}
