//! Employee records and clock-in/clock-out log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record_validation::{RecordValidationError, required_text};
use super::{EmployeeId, EmployeeLogId};

/// An employee on the front-desk roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Roster status label shown in exports.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

/// Validated payload for adding an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    role: String,
    is_active: bool,
}

impl NewEmployee {
    /// Validate a draft; `is_active` defaults to true.
    pub fn try_new(
        name: &str,
        role: &str,
        is_active: Option<bool>,
    ) -> Result<Self, RecordValidationError> {
        Ok(Self {
            name: required_text("name", name)?,
            role: required_text("role", role)?,
            is_active: is_active.unwrap_or(true),
        })
    }

    #[must_use]
    pub fn into_employee(self, id: EmployeeId, now: DateTime<Utc>) -> Employee {
        Employee {
            id,
            name: self.name,
            role: self.role,
            is_active: self.is_active,
            created_at: now,
        }
    }
}

/// Kind of employee log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeAction {
    ClockIn,
    ClockOut,
}

impl EmployeeAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClockIn => "clock_in",
            Self::ClockOut => "clock_out",
        }
    }
}

/// Append-only record of a clock-in or clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLog {
    pub id: EmployeeLogId,
    pub employee_id: EmployeeId,
    pub action: EmployeeAction,
    pub timestamp: DateTime<Utc>,
}

/// Derived clock state of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStatus {
    ClockedIn,
    ClockedOut,
}

impl From<EmployeeAction> for ClockStatus {
    fn from(action: EmployeeAction) -> Self {
        match action {
            EmployeeAction::ClockIn => Self::ClockedIn,
            EmployeeAction::ClockOut => Self::ClockedOut,
        }
    }
}

/// One row of the daily clock overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDaySummary {
    pub employee: Employee,
    pub status: ClockStatus,
    pub worked_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn new_employee_defaults_to_active() {
        let now = Utc
            .with_ymd_and_hms(2026, 1, 5, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        let employee = NewEmployee::try_new("John Doe", "Manager", None)
            .expect("valid employee")
            .into_employee(EmployeeId::new(1), now);
        assert!(employee.is_active);
        assert_eq!(employee.status_label(), "Active");
    }

    #[rstest]
    fn inactive_label() {
        let employee = NewEmployee::try_new("Jane Smith", "Coordinator", Some(false))
            .expect("valid employee")
            .into_employee(EmployeeId::new(2), Utc::now());
        assert_eq!(employee.status_label(), "Inactive");
    }

    #[rstest]
    fn blank_role_is_rejected() {
        assert_eq!(
            NewEmployee::try_new("David Brown", "", None),
            Err(RecordValidationError::BlankField { field: "role" })
        );
    }

    #[rstest]
    #[case(EmployeeAction::ClockIn, "clock_in", ClockStatus::ClockedIn)]
    #[case(EmployeeAction::ClockOut, "clock_out", ClockStatus::ClockedOut)]
    fn action_wire_names(
        #[case] action: EmployeeAction,
        #[case] wire: &str,
        #[case] status: ClockStatus,
    ) {
        assert_eq!(serde_json::to_value(action).expect("serialise"), json!(wire));
        assert_eq!(action.as_str(), wire);
        assert_eq!(ClockStatus::from(action), status);
    }
}
