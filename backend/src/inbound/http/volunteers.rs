//! Volunteer HTTP handlers.
//!
//! ```text
//! GET    /api/volunteers
//! POST   /api/volunteers
//! PATCH  /api/volunteers/{id}
//! DELETE /api/volunteers/{id}
//! GET    /api/volunteers/{id}/logs
//! POST   /api/volunteers/{id}/checkin
//! POST   /api/volunteers/{id}/checkout
//! ```

use actix_web::{delete, get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewVolunteer, Volunteer, VolunteerId, VolunteerLog, VolunteerUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::MessageResponse;
use crate::inbound::http::schemas::{ErrorSchema, VolunteerLogSchema, VolunteerSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_record, nullable};

/// Request payload for registering a volunteer.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolunteerRequest {
    #[serde(default)]
    #[schema(example = "Sarah Johnson")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Regular Volunteer")]
    pub role: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Partial volunteer update. Omitted fields are left unchanged; `null`
/// clears a nullable field.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolunteerRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub photo_url: Option<Option<String>>,
    pub is_checked_in: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub last_check_in: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub last_check_out: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateVolunteerRequest> for VolunteerUpdate {
    fn from(value: UpdateVolunteerRequest) -> Self {
        Self {
            name: value.name,
            role: value.role,
            photo_url: value.photo_url,
            is_checked_in: value.is_checked_in,
            last_check_in: value.last_check_in,
            last_check_out: value.last_check_out,
        }
    }
}

/// Optional check-out payload.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CheckOutRequest {
    #[schema(example = "Cleaned")]
    pub activity: Option<String>,
}

/// List every volunteer in creation order.
#[utoipa::path(
    get,
    path = "/api/volunteers",
    responses(
        (status = 200, description = "Volunteers", body = [VolunteerSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["volunteers"],
    operation_id = "listVolunteers"
)]
#[get("/volunteers")]
pub async fn list_volunteers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Volunteer>>> {
    let volunteers = state.volunteers_query.list().await?;
    Ok(web::Json(volunteers))
}

/// Register a volunteer.
#[utoipa::path(
    post,
    path = "/api/volunteers",
    request_body = CreateVolunteerRequest,
    responses(
        (status = 200, description = "Volunteer registered", body = VolunteerSchema),
        (status = 400, description = "Invalid volunteer data", body = ErrorSchema)
    ),
    tags = ["volunteers"],
    operation_id = "createVolunteer"
)]
#[post("/volunteers")]
pub async fn create_volunteer(
    state: web::Data<HttpState>,
    payload: web::Json<CreateVolunteerRequest>,
) -> ApiResult<web::Json<Volunteer>> {
    let payload = payload.into_inner();
    let draft = NewVolunteer::try_new(&payload.name, &payload.role, payload.photo_url.as_deref())
        .map_err(invalid_record("volunteer"))?;
    let volunteer = state.volunteers.create(draft).await?;
    Ok(web::Json(volunteer))
}

/// Update selected volunteer fields.
#[utoipa::path(
    patch,
    path = "/api/volunteers/{id}",
    params(("id" = u64, Path, description = "Volunteer id")),
    request_body = UpdateVolunteerRequest,
    responses(
        (status = 200, description = "Updated volunteer", body = VolunteerSchema),
        (status = 400, description = "Invalid volunteer data", body = ErrorSchema),
        (status = 404, description = "Volunteer not found", body = ErrorSchema)
    ),
    tags = ["volunteers"],
    operation_id = "updateVolunteer"
)]
#[patch("/volunteers/{id}")]
pub async fn update_volunteer(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateVolunteerRequest>,
) -> ApiResult<web::Json<Volunteer>> {
    let id = VolunteerId::new(path.into_inner());
    let volunteer = state
        .volunteers
        .update(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(volunteer))
}

/// Delete a volunteer and all of their logs.
#[utoipa::path(
    delete,
    path = "/api/volunteers/{id}",
    params(("id" = u64, Path, description = "Volunteer id")),
    responses(
        (status = 200, description = "Volunteer deleted", body = MessageResponse),
        (status = 404, description = "Volunteer not found", body = ErrorSchema)
    ),
    tags = ["volunteers"],
    operation_id = "deleteVolunteer"
)]
#[delete("/volunteers/{id}")]
pub async fn delete_volunteer(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .volunteers
        .delete(VolunteerId::new(path.into_inner()))
        .await?;
    Ok(web::Json(MessageResponse::new(
        "Volunteer deleted successfully",
    )))
}

/// Attendance history of one volunteer.
#[utoipa::path(
    get,
    path = "/api/volunteers/{id}/logs",
    params(("id" = u64, Path, description = "Volunteer id")),
    responses(
        (status = 200, description = "Volunteer logs", body = [VolunteerLogSchema]),
        (status = 404, description = "Volunteer not found", body = ErrorSchema)
    ),
    tags = ["volunteers"],
    operation_id = "listVolunteerLogs"
)]
#[get("/volunteers/{id}/logs")]
pub async fn list_volunteer_logs(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<VolunteerLog>>> {
    let logs = state
        .volunteers_query
        .volunteer_logs(VolunteerId::new(path.into_inner()))
        .await?;
    Ok(web::Json(logs))
}

/// Check a volunteer in.
#[utoipa::path(
    post,
    path = "/api/volunteers/{id}/checkin",
    params(("id" = u64, Path, description = "Volunteer id")),
    responses(
        (status = 200, description = "Checked-in volunteer", body = VolunteerSchema),
        (status = 404, description = "Volunteer not found", body = ErrorSchema)
    ),
    tags = ["volunteers"],
    operation_id = "checkInVolunteer"
)]
#[post("/volunteers/{id}/checkin")]
pub async fn check_in(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Volunteer>> {
    let volunteer = state
        .volunteers
        .check_in(VolunteerId::new(path.into_inner()))
        .await?;
    Ok(web::Json(volunteer))
}

/// Check a volunteer out, recording what they worked on.
///
/// The body is optional; a missing or unreadable body records no activity.
#[utoipa::path(
    post,
    path = "/api/volunteers/{id}/checkout",
    params(("id" = u64, Path, description = "Volunteer id")),
    request_body(content = CheckOutRequest, description = "Optional activity"),
    responses(
        (status = 200, description = "Checked-out volunteer", body = VolunteerSchema),
        (status = 404, description = "Volunteer not found", body = ErrorSchema)
    ),
    tags = ["volunteers"],
    operation_id = "checkOutVolunteer"
)]
#[post("/volunteers/{id}/checkout")]
pub async fn check_out(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: Option<web::Json<CheckOutRequest>>,
) -> ApiResult<web::Json<Volunteer>> {
    let activity = payload.and_then(|body| body.into_inner().activity);
    let volunteer = state
        .volunteers
        .check_out(VolunteerId::new(path.into_inner()), activity)
        .await?;
    Ok(web::Json(volunteer))
}

#[cfg(test)]
#[path = "volunteers_tests.rs"]
mod tests;
