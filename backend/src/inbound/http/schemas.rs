//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain type's
//! name.

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Volunteer not found")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "00000000-0000-0000-0000-000000000000")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Volunteer`].
#[derive(ToSchema)]
#[schema(as = Volunteer, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct VolunteerSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Sarah Johnson")]
    name: String,
    #[schema(example = "Regular Volunteer")]
    role: String,
    photo_url: Option<String>,
    is_checked_in: bool,
    last_check_in: Option<DateTime<Utc>>,
    last_check_out: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// OpenAPI schema for [`crate::domain::VolunteerAction`].
#[derive(ToSchema)]
#[schema(as = VolunteerAction)]
pub enum VolunteerActionSchema {
    #[schema(rename = "check_in")]
    CheckIn,
    #[schema(rename = "check_out")]
    CheckOut,
}

/// OpenAPI schema for [`crate::domain::VolunteerLog`].
#[derive(ToSchema)]
#[schema(as = VolunteerLog, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct VolunteerLogSchema {
    id: u64,
    volunteer_id: u64,
    action: VolunteerActionSchema,
    timestamp: DateTime<Utc>,
    /// Set on check-out entries only.
    activity: Option<String>,
    /// Minutes worked; set on check-out entries only.
    hours_worked: Option<i64>,
}

/// OpenAPI schema for [`crate::domain::Guest`].
#[derive(ToSchema)]
#[schema(as = Guest, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GuestSchema {
    id: u64,
    #[schema(example = "Grace")]
    first_name: String,
    #[schema(example = "Hopper")]
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    purpose: Option<String>,
    wants_newsletter: bool,
    visited_at: DateTime<Utc>,
}

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = Employee, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    id: u64,
    #[schema(example = "John Doe")]
    name: String,
    #[schema(example = "Manager")]
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

/// OpenAPI schema for [`crate::domain::EmployeeAction`].
#[derive(ToSchema)]
#[schema(as = EmployeeAction)]
pub enum EmployeeActionSchema {
    #[schema(rename = "clock_in")]
    ClockIn,
    #[schema(rename = "clock_out")]
    ClockOut,
}

/// OpenAPI schema for [`crate::domain::EmployeeLog`].
#[derive(ToSchema)]
#[schema(as = EmployeeLog, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeLogSchema {
    id: u64,
    employee_id: u64,
    action: EmployeeActionSchema,
    timestamp: DateTime<Utc>,
}

/// OpenAPI schema for [`crate::domain::ClockStatus`].
#[derive(ToSchema)]
#[schema(as = ClockStatus)]
pub enum ClockStatusSchema {
    #[schema(rename = "clocked_in")]
    ClockedIn,
    #[schema(rename = "clocked_out")]
    ClockedOut,
}

/// OpenAPI schema for [`crate::domain::EmployeeDaySummary`].
#[derive(ToSchema)]
#[schema(as = EmployeeDaySummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeDaySummarySchema {
    employee: EmployeeSchema,
    status: ClockStatusSchema,
    /// Minutes across today's paired clock-in/clock-out entries.
    worked_minutes: i64,
}

/// OpenAPI schema for [`crate::domain::ports::DashboardStats`].
#[derive(ToSchema)]
#[schema(as = DashboardStats)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DashboardStatsSchema {
    /// Volunteers currently checked in.
    volunteers: usize,
    /// Guests who visited today.
    guests: usize,
    /// Active employees.
    employees: usize,
}
