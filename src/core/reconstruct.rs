//! Shift reconstruction.
//!
//! Punch events arrive grouped by calendar day, but a night shift's
//! punches straddle two days: the report labels a 01:30 logout with the
//! day the shift started. Reconstruction partitions each employee's
//! events into shifts, re-attributes rollover punches to the following
//! day, and tags every shift with its start and end dates.
//!
//! The grouping runs as a small state machine per employee: either no
//! shift is open, or one is, and each event either attaches to the open
//! shift or closes it and opens a new one. What an event does depends on
//! its direction, its time of day relative to the evening and night-end
//! thresholds, and its date relative to the open shift.

use crate::core::policy::ShiftPolicy;
use crate::models::{PunchEvent, Shift, ShiftRow};
use crate::utils::date::next_day;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Append to the open shift as-is.
    Attach,
    /// Append with the attributed date advanced past midnight.
    AttachRollover,
    /// Close the open shift and open a new one with this event.
    CloseAndOpen,
}

struct ShiftMachine<'a> {
    policy: &'a ShiftPolicy,
    buffer: Vec<PunchEvent>,
    done: Vec<Shift>,
}

impl<'a> ShiftMachine<'a> {
    fn new(policy: &'a ShiftPolicy) -> Self {
        Self {
            policy,
            buffer: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Decide what `ev` does to the open shift. Only called with a
    /// non-empty buffer.
    fn classify(&self, ev: &PunchEvent) -> Action {
        let first = &self.buffer[0];
        let anchor = first.date;
        let night_shift = self.policy.is_evening(first.time);
        // A trailing OUT means the work period was closed by a logout;
        // a trailing IN means it is still open.
        let pending_logout = self.buffer[self.buffer.len() - 1].direction.is_out();

        if night_shift {
            if self.policy.is_evening(ev.time) {
                // A later evening with the previous night already logged
                // out is a new night, not a continuation.
                if ev.date > anchor && pending_logout {
                    Action::CloseAndOpen
                } else {
                    Action::Attach
                }
            } else if self.policy.is_night_end(ev.time) {
                Action::AttachRollover
            } else if ev.direction.is_out() && !pending_logout {
                // Early-morning logout closing the night's open IN.
                Action::Attach
            } else {
                Action::CloseAndOpen
            }
        } else if self.policy.is_evening(ev.time) {
            // A day shift may run into the evening, but once it logged
            // out an evening punch starts a night shift.
            if pending_logout {
                Action::CloseAndOpen
            } else {
                Action::Attach
            }
        } else if ev.date == anchor {
            Action::Attach
        } else {
            Action::CloseAndOpen
        }
    }

    fn step(&mut self, ev: &PunchEvent) {
        if self.buffer.is_empty() {
            self.buffer.push(ev.clone());
            return;
        }

        match self.classify(ev) {
            Action::Attach => self.buffer.push(ev.clone()),
            Action::AttachRollover => {
                let mut corrected = ev.clone();
                // The report labels rollover punches with the shift's
                // start date; a punch already carrying the real next-day
                // date is left alone.
                if corrected.date == self.buffer[0].date {
                    corrected.date = next_day(corrected.date);
                }
                self.buffer.push(corrected);
            }
            Action::CloseAndOpen => {
                self.flush();
                self.buffer.push(ev.clone());
            }
        }
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.buffer);
        self.done.push(Shift {
            employee_id: events[0].employee_id.clone(),
            start_date: events[0].date,
            end_date: end_date_of(&events),
            events,
        });
    }

    fn finish(mut self) -> Vec<Shift> {
        self.flush();
        self.done
    }
}

/// The shift's end date: the last event's attributed date, advanced each
/// time an OUT→IN pair inside the shift crosses a date boundary.
fn end_date_of(events: &[PunchEvent]) -> chrono::NaiveDate {
    let mut end = events[events.len() - 1].date;
    for pair in events.windows(2) {
        if pair[0].direction.is_out() && pair[1].direction.is_in() && pair[0].date != pair[1].date {
            end = pair[1].date;
        }
    }
    end
}

/// Partition punch events into shifts.
///
/// Events are grouped by employee id (ascending) and sorted
/// chronologically within each employee (stable on ties), so the result
/// does not depend on input order.
pub fn reconstruct(events: &[PunchEvent], policy: &ShiftPolicy) -> Vec<Shift> {
    let mut by_employee: BTreeMap<String, Vec<PunchEvent>> = BTreeMap::new();
    for ev in events {
        by_employee
            .entry(ev.employee_id.clone())
            .or_default()
            .push(ev.clone());
    }

    let mut shifts = Vec::new();
    for (_, mut partition) in by_employee {
        partition.sort_by_key(|e| e.timestamp());

        let mut machine = ShiftMachine::new(policy);
        for ev in &partition {
            machine.step(ev);
        }
        shifts.extend(machine.finish());
    }

    shifts
}

/// Flatten shifts into organized-table rows.
///
/// Each row's date is the shift start date when its own attributed date
/// matches the shift's first event, otherwise the shift end date as
/// advanced so far by OUT→IN pairs crossing a date boundary.
pub fn organized_rows(shifts: &[Shift]) -> Vec<ShiftRow> {
    let mut rows = Vec::new();

    for shift in shifts {
        let first_date = shift.first().date;
        let mut end = shift.last().date;

        for (i, ev) in shift.events.iter().enumerate() {
            if i > 0 {
                let prev = &shift.events[i - 1];
                if prev.direction.is_out() && ev.direction.is_in() && prev.date != ev.date {
                    end = ev.date;
                }
            }

            rows.push(ShiftRow {
                date: if ev.date == first_date { shift.start_date } else { end },
                employee_id: ev.employee_id.clone(),
                employee_name: ev.employee_name.clone(),
                punch_time: ev.time_str(),
                direction: ev.direction.as_report_str(),
                shift_start: shift.start_date,
                shift_end: end,
            });
        }
    }

    rows
}
