//! CSV rendering for the data-access downloads.
//!
//! Volunteer and employee exports carry two tables: the records, a blank
//! line, a title row, then the matching log table.

use chrono::{DateTime, SecondsFormat, Utc};
use csv::Writer;
use thiserror::Error;

use crate::domain::Guest;
use crate::domain::ports::{EmployeeExport, VolunteerExport};

/// Failure while rendering an export body.
#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("failed to write csv row: {0}")]
    Write(#[from] csv::Error),
    #[error("failed to flush csv buffer: {message}")]
    Flush { message: String },
    #[error("csv output was not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

const VOLUNTEER_HEADER: [&str; 7] = [
    "ID",
    "Name",
    "Role",
    "Status",
    "Last Check In",
    "Last Check Out",
    "Created At",
];
const VOLUNTEER_LOG_HEADER: [&str; 6] = [
    "ID",
    "Volunteer ID",
    "Action",
    "Timestamp",
    "Activity",
    "Hours Worked",
];
const GUEST_HEADER: [&str; 8] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Purpose",
    "Newsletter",
    "Visited At",
];
const EMPLOYEE_HEADER: [&str; 5] = ["ID", "Name", "Role", "Status", "Created At"];
const EMPLOYEE_LOG_HEADER: [&str; 4] = ["ID", "Employee ID", "Action", "Timestamp"];

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn optional_timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map(timestamp).unwrap_or_default()
}

fn render_table<I>(header: &[&str], rows: I) -> Result<String, CsvExportError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer.into_inner().map_err(|err| CsvExportError::Flush {
        message: err.to_string(),
    })?;
    Ok(String::from_utf8(bytes)?)
}

fn with_section(records: String, title: &str, logs: String) -> String {
    format!("{records}\n{title}\n{logs}")
}

/// Render the volunteer roster followed by the volunteer log table.
pub fn volunteers_csv(export: &VolunteerExport) -> Result<String, CsvExportError> {
    let records = render_table(
        &VOLUNTEER_HEADER,
        export.volunteers.iter().map(|volunteer| {
            vec![
                volunteer.id.to_string(),
                volunteer.name.clone(),
                volunteer.role.clone(),
                volunteer.status().label().to_owned(),
                optional_timestamp(volunteer.last_check_in),
                optional_timestamp(volunteer.last_check_out),
                timestamp(volunteer.created_at),
            ]
        }),
    )?;
    let logs = render_table(
        &VOLUNTEER_LOG_HEADER,
        export.logs.iter().map(|log| {
            vec![
                log.id.to_string(),
                log.volunteer_id.to_string(),
                log.action.as_str().to_owned(),
                timestamp(log.timestamp),
                log.activity.clone().unwrap_or_default(),
                log.minutes_worked.unwrap_or(0).to_string(),
            ]
        }),
    )?;
    Ok(with_section(records, "Volunteer Logs", logs))
}

/// Render the guest register.
pub fn guests_csv(guests: &[Guest]) -> Result<String, CsvExportError> {
    render_table(
        &GUEST_HEADER,
        guests.iter().map(|guest| {
            vec![
                guest.id.to_string(),
                guest.first_name.clone(),
                guest.last_name.clone(),
                guest.email.clone().unwrap_or_default(),
                guest.phone.clone().unwrap_or_default(),
                guest.purpose.clone().unwrap_or_default(),
                guest.newsletter_label().to_owned(),
                timestamp(guest.visited_at),
            ]
        }),
    )
}

/// Render the employee roster followed by the clock log table.
pub fn employees_csv(export: &EmployeeExport) -> Result<String, CsvExportError> {
    let records = render_table(
        &EMPLOYEE_HEADER,
        export.employees.iter().map(|employee| {
            vec![
                employee.id.to_string(),
                employee.name.clone(),
                employee.role.clone(),
                employee.status_label().to_owned(),
                timestamp(employee.created_at),
            ]
        }),
    )?;
    let logs = render_table(
        &EMPLOYEE_LOG_HEADER,
        export.logs.iter().map(|log| {
            vec![
                log.id.to_string(),
                log.employee_id.to_string(),
                log.action.as_str().to_owned(),
                timestamp(log.timestamp),
            ]
        }),
    )?;
    Ok(with_section(records, "Employee Logs", logs))
}
