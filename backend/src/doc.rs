//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` handler plus the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`] so domain types stay
//! free of utoipa derives. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::dto::MessageResponse;
use crate::inbound::http::employees::CreateEmployeeRequest;
use crate::inbound::http::guests::RegisterGuestRequest;
use crate::inbound::http::reports::ExportKind;
use crate::inbound::http::schemas::{
    ClockStatusSchema, DashboardStatsSchema, EmployeeActionSchema, EmployeeDaySummarySchema,
    EmployeeLogSchema, EmployeeSchema, ErrorCodeSchema, ErrorSchema, GuestSchema,
    VolunteerActionSchema, VolunteerLogSchema, VolunteerSchema,
};
use crate::inbound::http::volunteers::{
    CheckOutRequest, CreateVolunteerRequest, UpdateVolunteerRequest,
};

/// OpenAPI document for the front-desk API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Front desk API",
        description = "Check-in tracking for volunteers, guests, and employees."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::volunteers::list_volunteers,
        crate::inbound::http::volunteers::create_volunteer,
        crate::inbound::http::volunteers::update_volunteer,
        crate::inbound::http::volunteers::delete_volunteer,
        crate::inbound::http::volunteers::list_volunteer_logs,
        crate::inbound::http::volunteers::check_in,
        crate::inbound::http::volunteers::check_out,
        crate::inbound::http::guests::list_guests,
        crate::inbound::http::guests::todays_guests,
        crate::inbound::http::guests::register_guest,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::employees_today,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::employees::clock_in,
        crate::inbound::http::employees::clock_out,
        crate::inbound::http::reports::dashboard_stats,
        crate::inbound::http::reports::todays_employee_logs,
        crate::inbound::http::reports::export_csv,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        VolunteerSchema,
        VolunteerActionSchema,
        VolunteerLogSchema,
        GuestSchema,
        EmployeeSchema,
        EmployeeActionSchema,
        EmployeeLogSchema,
        ClockStatusSchema,
        EmployeeDaySummarySchema,
        DashboardStatsSchema,
        CreateVolunteerRequest,
        UpdateVolunteerRequest,
        CheckOutRequest,
        RegisterGuestRequest,
        CreateEmployeeRequest,
        MessageResponse,
        ExportKind,
    )),
    tags(
        (name = "volunteers", description = "Volunteer roster and attendance"),
        (name = "guests", description = "Guest visit register"),
        (name = "employees", description = "Employee roster and clock entries"),
        (name = "reports", description = "Dashboard counters and CSV exports"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
