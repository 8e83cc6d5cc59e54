//! Employee HTTP handlers.
//!
//! ```text
//! GET    /api/employees
//! POST   /api/employees {"name":"Priya","role":"Front Desk"}
//! GET    /api/employees/today
//! DELETE /api/employees/{id}
//! POST   /api/employees/{id}/clockin
//! POST   /api/employees/{id}/clockout
//! ```

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Employee, EmployeeDaySummary, EmployeeId, EmployeeLog, NewEmployee};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::MessageResponse;
use crate::inbound::http::schemas::{
    EmployeeDaySummarySchema, EmployeeLogSchema, EmployeeSchema, ErrorSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::invalid_record;

/// Request payload for adding an employee to the roster.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    #[schema(example = "Priya Patel")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Front Desk")]
    pub role: String,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/employees",
    responses((status = 200, description = "Employees", body = [EmployeeSchema])),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    Ok(web::Json(state.employees_query.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Employee added", body = EmployeeSchema),
        (status = 400, description = "Invalid employee data", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeRequest>,
) -> ApiResult<web::Json<Employee>> {
    let draft = NewEmployee::try_new(&payload.name, &payload.role, payload.is_active)
        .map_err(invalid_record("employee"))?;
    Ok(web::Json(state.employees.create(draft).await?))
}

/// Per-employee clock status and minutes worked during the current local day.
///
/// Registered ahead of the `{id}` routes so `today` is never parsed as an id.
#[utoipa::path(
    get,
    path = "/api/employees/today",
    responses((status = 200, description = "Today's summary", body = [EmployeeDaySummarySchema])),
    tags = ["employees"],
    operation_id = "employeesToday"
)]
#[get("/employees/today")]
pub async fn employees_today(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EmployeeDaySummary>>> {
    Ok(web::Json(state.employees_query.todays_summary().await?))
}

/// Remove an employee and their clock history.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = u64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .employees
        .delete(EmployeeId::new(path.into_inner()))
        .await?;
    Ok(web::Json(MessageResponse::new("Employee deleted successfully")))
}

#[utoipa::path(
    post,
    path = "/api/employees/{id}/clockin",
    params(("id" = u64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Clock-in entry", body = EmployeeLogSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "clockIn"
)]
#[post("/employees/{id}/clockin")]
pub async fn clock_in(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<EmployeeLog>> {
    let log = state
        .employees
        .clock_in(EmployeeId::new(path.into_inner()))
        .await?;
    Ok(web::Json(log))
}

#[utoipa::path(
    post,
    path = "/api/employees/{id}/clockout",
    params(("id" = u64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Clock-out entry", body = EmployeeLogSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "clockOut"
)]
#[post("/employees/{id}/clockout")]
pub async fn clock_out(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<EmployeeLog>> {
    let log = state
        .employees
        .clock_out(EmployeeId::new(path.into_inner()))
        .await?;
    Ok(web::Json(log))
}
