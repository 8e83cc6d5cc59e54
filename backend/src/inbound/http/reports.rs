//! Dashboard and export handlers.
//!
//! ```text
//! GET /api/stats
//! GET /api/employee-logs/today
//! GET /api/export/{volunteers|guests|employees}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::ports::DashboardStats;
use crate::domain::{EmployeeLog, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::csv_export::{CsvExportError, employees_csv, guests_csv, volunteers_csv};
use crate::inbound::http::schemas::{DashboardStatsSchema, EmployeeLogSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Downloadable record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Volunteers,
    Guests,
    Employees,
}

impl ExportKind {
    const fn file_name(self) -> &'static str {
        match self {
            Self::Volunteers => "volunteers.csv",
            Self::Guests => "guests.csv",
            Self::Employees => "employees.csv",
        }
    }
}

/// Dashboard counters.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses((status = 200, description = "Dashboard counters", body = DashboardStatsSchema)),
    tags = ["reports"],
    operation_id = "dashboardStats"
)]
#[get("/stats")]
pub async fn dashboard_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<DashboardStats>> {
    Ok(web::Json(state.reports.dashboard_stats().await?))
}

/// Clock entries recorded during the current local day.
#[utoipa::path(
    get,
    path = "/api/employee-logs/today",
    responses((status = 200, description = "Today's clock entries", body = [EmployeeLogSchema])),
    tags = ["reports"],
    operation_id = "todaysEmployeeLogs"
)]
#[get("/employee-logs/today")]
pub async fn todays_employee_logs(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EmployeeLog>>> {
    Ok(web::Json(state.employees_query.todays_logs().await?))
}

/// Download a CSV export.
#[utoipa::path(
    get,
    path = "/api/export/{kind}",
    params(("kind" = ExportKind, Path, description = "Record kind to export")),
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 404, description = "Unknown export kind", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "exportCsv"
)]
#[get("/export/{kind}")]
pub async fn export_csv(
    state: web::Data<HttpState>,
    path: web::Path<ExportKind>,
) -> ApiResult<HttpResponse> {
    let kind = path.into_inner();
    let body = match kind {
        ExportKind::Volunteers => volunteers_csv(&state.reports.volunteer_export().await?),
        ExportKind::Guests => guests_csv(&state.reports.guest_export().await?),
        ExportKind::Employees => employees_csv(&state.reports.employee_export().await?),
    }
    .map_err(map_export_error)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", kind.file_name()),
        ))
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(body))
}

fn map_export_error(err: CsvExportError) -> Error {
    Error::internal(format!("export failed: {err}"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockable::Clock;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::ports::{EmployeeRepository, GuestRepository, VolunteerRepository};
    use crate::domain::{GuestDraft, NewEmployee, NewGuest, NewVolunteer, VolunteerUpdate};
    use crate::inbound::http::test_utils::TestBackend;

    fn seed(backend: &TestBackend) {
        let store = &backend.store;
        let sarah = store.create_volunteer(
            NewVolunteer::try_new("Sarah Johnson", "Regular Volunteer", None)
                .expect("valid volunteer"),
        );
        store.create_volunteer(
            NewVolunteer::try_new("Mike Chen", "Regular Volunteer", None).expect("valid volunteer"),
        );
        store.update_volunteer(
            sarah.id,
            &VolunteerUpdate {
                is_checked_in: Some(true),
                last_check_in: Some(Some(backend.clock.utc())),
                ..VolunteerUpdate::default()
            },
        );
        store.create_guest(
            NewGuest::try_new(GuestDraft {
                first_name: "Jordan",
                last_name: "Lee",
                ..GuestDraft::default()
            })
            .expect("valid guest"),
        );
        store.create_employee(
            NewEmployee::try_new("Priya Patel", "Front Desk", None).expect("valid employee"),
        );
        store.create_employee(
            NewEmployee::try_new("Sam Okafor", "Security", Some(false)).expect("valid employee"),
        );
    }

    #[actix_web::test]
    async fn stats_count_checked_in_today_and_active() {
        let backend = TestBackend::new();
        seed(&backend);
        let app = actix_test::init_service(backend.app()).await;

        let request = actix_test::TestRequest::get().uri("/api/stats").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body, json!({ "volunteers": 1, "guests": 1, "employees": 1 }));
    }

    #[actix_web::test]
    async fn stats_drop_yesterdays_guests() {
        let backend = TestBackend::new();
        seed(&backend);
        backend.clock.advance(Duration::from_secs(36 * 60 * 60));
        let app = actix_test::init_service(backend.app()).await;

        let request = actix_test::TestRequest::get().uri("/api/stats").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["guests"], json!(0));
    }

    #[rstest]
    #[case("volunteers", "ID,Name,Role,Status,Last Check In,Last Check Out,Created At")]
    #[case("guests", "ID,First Name,Last Name,Email,Phone,Purpose,Newsletter,Visited At")]
    #[case("employees", "ID,Name,Role,Status,Created At")]
    #[actix_web::test]
    async fn exports_are_csv_attachments(#[case] kind: &str, #[case] header_row: &str) {
        let backend = TestBackend::new();
        seed(&backend);
        let app = actix_test::init_service(backend.app()).await;

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/export/{kind}"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers
                .get("content-type")
                .and_then(|value| value.to_str().ok()),
            Some("text/csv")
        );
        assert_eq!(
            headers
                .get("content-disposition")
                .and_then(|value| value.to_str().ok()),
            Some(format!("attachment; filename={kind}.csv").as_str())
        );
        let body = actix_test::read_body(response).await;
        let text = std::str::from_utf8(&body).expect("utf-8 body");
        assert_eq!(text.lines().next(), Some(header_row));
    }

    #[actix_web::test]
    async fn unknown_export_kind_is_not_found() {
        let backend = TestBackend::new();
        let app = actix_test::init_service(backend.app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/export/visitors")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
