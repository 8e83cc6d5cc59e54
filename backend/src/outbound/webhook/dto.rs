//! JSON payloads accepted by the spreadsheet webhook.
//!
//! Every value is flattened for spreadsheet rows: statuses become labels and
//! absent timestamps or text become empty strings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{Employee, EmployeeLog, Guest, SyncSnapshot, Volunteer, VolunteerLog};

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(super) enum SnapshotPayload<'a> {
    Volunteers {
        volunteers: Vec<VolunteerRow<'a>>,
        logs: Vec<VolunteerLogRow<'a>>,
    },
    Guests {
        guests: Vec<GuestRow<'a>>,
    },
    Employees {
        employees: Vec<EmployeeRow<'a>>,
        logs: Vec<EmployeeLogRow>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VolunteerRow<'a> {
    id: u64,
    name: &'a str,
    role: &'a str,
    status: &'static str,
    last_check_in: String,
    last_check_out: String,
    created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VolunteerLogRow<'a> {
    id: u64,
    volunteer_id: u64,
    action: &'static str,
    timestamp: String,
    activity: &'a str,
    hours_worked: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GuestRow<'a> {
    id: u64,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    purpose: &'a str,
    wants_newsletter: &'static str,
    visited_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EmployeeRow<'a> {
    id: u64,
    name: &'a str,
    role: &'a str,
    status: &'static str,
    created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EmployeeLogRow {
    id: u64,
    employee_id: u64,
    action: &'static str,
    timestamp: String,
}

fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn iso_or_blank(instant: Option<DateTime<Utc>>) -> String {
    instant.map(iso).unwrap_or_default()
}

impl<'a> From<&'a Volunteer> for VolunteerRow<'a> {
    fn from(volunteer: &'a Volunteer) -> Self {
        Self {
            id: volunteer.id.get(),
            name: &volunteer.name,
            role: &volunteer.role,
            status: volunteer.status().label(),
            last_check_in: iso_or_blank(volunteer.last_check_in),
            last_check_out: iso_or_blank(volunteer.last_check_out),
            created_at: iso(volunteer.created_at),
        }
    }
}

impl<'a> From<&'a VolunteerLog> for VolunteerLogRow<'a> {
    fn from(log: &'a VolunteerLog) -> Self {
        Self {
            id: log.id.get(),
            volunteer_id: log.volunteer_id.get(),
            action: log.action.as_str(),
            timestamp: iso(log.timestamp),
            activity: log.activity.as_deref().unwrap_or_default(),
            hours_worked: log.minutes_worked.unwrap_or(0),
        }
    }
}

impl<'a> From<&'a Guest> for GuestRow<'a> {
    fn from(guest: &'a Guest) -> Self {
        Self {
            id: guest.id.get(),
            first_name: &guest.first_name,
            last_name: &guest.last_name,
            email: guest.email.as_deref().unwrap_or_default(),
            phone: guest.phone.as_deref().unwrap_or_default(),
            purpose: guest.purpose.as_deref().unwrap_or_default(),
            wants_newsletter: guest.newsletter_label(),
            visited_at: iso(guest.visited_at),
        }
    }
}

impl<'a> From<&'a Employee> for EmployeeRow<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            id: employee.id.get(),
            name: &employee.name,
            role: &employee.role,
            status: employee.status_label(),
            created_at: iso(employee.created_at),
        }
    }
}

impl From<&EmployeeLog> for EmployeeLogRow {
    fn from(log: &EmployeeLog) -> Self {
        Self {
            id: log.id.get(),
            employee_id: log.employee_id.get(),
            action: log.action.as_str(),
            timestamp: iso(log.timestamp),
        }
    }
}

impl<'a> From<&'a SyncSnapshot> for SnapshotPayload<'a> {
    fn from(snapshot: &'a SyncSnapshot) -> Self {
        match snapshot {
            SyncSnapshot::Volunteers { volunteers, logs } => Self::Volunteers {
                volunteers: volunteers.iter().map(Into::into).collect(),
                logs: logs.iter().map(Into::into).collect(),
            },
            SyncSnapshot::Guests { guests } => Self::Guests {
                guests: guests.iter().map(Into::into).collect(),
            },
            SyncSnapshot::Employees { employees, logs } => Self::Employees {
                employees: employees.iter().map(Into::into).collect(),
                logs: logs.iter().map(Into::into).collect(),
            },
        }
    }
}
