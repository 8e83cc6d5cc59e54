//! Attendance bookkeeping: check-in/out transitions and derived durations.
//!
//! Everything here is a pure function of its inputs. Callers supply the
//! current time.

use chrono::{DateTime, TimeDelta, Utc};

use super::{
    ClockStatus, EmployeeAction, EmployeeLog, Volunteer, VolunteerAction, VolunteerLog,
    VolunteerUpdate,
};

/// A timestamped log entry that opens or closes a work interval.
pub trait AttendanceEntry {
    fn timestamp(&self) -> DateTime<Utc>;

    /// True for `check_in`/`clock_in` entries.
    fn marks_start(&self) -> bool;
}

impl AttendanceEntry for VolunteerLog {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn marks_start(&self) -> bool {
        self.action == VolunteerAction::CheckIn
    }
}

impl AttendanceEntry for EmployeeLog {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn marks_start(&self) -> bool {
        self.action == EmployeeAction::ClockIn
    }
}

/// Whole minutes elapsed since `start`, floored.
///
/// Returns 0 when `start` is absent or lies in the future.
#[must_use]
pub fn minutes_since(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    start.map_or(0, |start| (now - start).num_minutes().max(0))
}

/// Fields written by a check-in.
#[must_use]
pub fn check_in_update(now: DateTime<Utc>) -> VolunteerUpdate {
    VolunteerUpdate {
        is_checked_in: Some(true),
        last_check_in: Some(Some(now)),
        ..VolunteerUpdate::default()
    }
}

/// Fields written by a check-out, with the minutes worked since the last
/// check-in.
#[must_use]
pub fn check_out_update(volunteer: &Volunteer, now: DateTime<Utc>) -> (VolunteerUpdate, i64) {
    let minutes = minutes_since(volunteer.last_check_in, now);
    let update = VolunteerUpdate {
        is_checked_in: Some(false),
        last_check_out: Some(Some(now)),
        ..VolunteerUpdate::default()
    };
    (update, minutes)
}

/// Total time across start/end pairs.
///
/// Starts and ends are each sorted ascending and the nth start is paired
/// with the nth end. Unmatched entries contribute nothing.
pub fn paired_duration<E: AttendanceEntry>(entries: &[E]) -> TimeDelta {
    let (mut starts, mut ends): (Vec<_>, Vec<_>) = entries
        .iter()
        .partition(|entry| entry.marks_start());
    starts.sort_by_key(|entry| entry.timestamp());
    ends.sort_by_key(|entry| entry.timestamp());
    starts
        .iter()
        .zip(&ends)
        .map(|(start, end)| end.timestamp() - start.timestamp())
        .fold(TimeDelta::zero(), |total, span| total + span)
}

/// [`paired_duration`] in whole minutes.
pub fn paired_minutes<E: AttendanceEntry>(entries: &[E]) -> i64 {
    paired_duration(entries).num_minutes()
}

/// Clock state implied by the most recent entry; clocked out when empty.
///
/// Entries sharing the latest timestamp resolve to the one appended last.
#[must_use]
pub fn clock_status(logs: &[EmployeeLog]) -> ClockStatus {
    logs.iter()
        .max_by_key(|log| log.timestamp)
        .map_or(ClockStatus::ClockedOut, |log| log.action.into())
}
