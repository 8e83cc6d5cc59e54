//! Guest HTTP handlers.
//!
//! ```text
//! GET  /api/guests
//! GET  /api/guests/today
//! POST /api/guests {"firstName":"Jordan","lastName":"Lee","wantsNewsletter":true}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Guest, GuestDraft, NewGuest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, GuestSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::invalid_record;

/// Request payload for registering a guest visit.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGuestRequest {
    #[serde(default)]
    #[schema(example = "Jordan")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Lee")]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    #[schema(example = "Tour")]
    pub purpose: Option<String>,
    #[serde(default)]
    pub wants_newsletter: Option<bool>,
}

impl RegisterGuestRequest {
    fn draft(&self) -> GuestDraft<'_> {
        GuestDraft {
            first_name: &self.first_name,
            last_name: &self.last_name,
            email: self.email.as_deref(),
            phone: self.phone.as_deref(),
            purpose: self.purpose.as_deref(),
            wants_newsletter: self.wants_newsletter,
        }
    }
}

/// List every recorded guest visit.
#[utoipa::path(
    get,
    path = "/api/guests",
    responses((status = 200, description = "Guests", body = [GuestSchema])),
    tags = ["guests"],
    operation_id = "listGuests"
)]
#[get("/guests")]
pub async fn list_guests(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Guest>>> {
    Ok(web::Json(state.guests_query.list().await?))
}

/// Guests who visited during the current local day.
#[utoipa::path(
    get,
    path = "/api/guests/today",
    responses((status = 200, description = "Today's guests", body = [GuestSchema])),
    tags = ["guests"],
    operation_id = "listTodaysGuests"
)]
#[get("/guests/today")]
pub async fn todays_guests(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Guest>>> {
    Ok(web::Json(state.guests_query.today().await?))
}

/// Register a guest visit stamped with the current time.
#[utoipa::path(
    post,
    path = "/api/guests",
    request_body = RegisterGuestRequest,
    responses(
        (status = 200, description = "Guest registered", body = GuestSchema),
        (status = 400, description = "Invalid guest data", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "registerGuest"
)]
#[post("/guests")]
pub async fn register_guest(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterGuestRequest>,
) -> ApiResult<web::Json<Guest>> {
    let guest = NewGuest::try_new(payload.draft()).map_err(invalid_record("guest"))?;
    Ok(web::Json(state.guests.register(guest).await?))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::SyncSnapshot;
    use crate::inbound::http::test_utils::TestBackend;

    #[actix_web::test]
    async fn register_trims_and_defaults_optional_fields() {
        let backend = TestBackend::new();
        let app = actix_test::init_service(backend.app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/guests")
            .set_json(json!({
                "firstName": " Jordan ",
                "lastName": "Lee",
                "email": "  ",
                "purpose": "Tour"
            }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["id"], json!(1));
        assert_eq!(body["firstName"], json!("Jordan"));
        assert_eq!(body["email"], Value::Null);
        assert_eq!(body["purpose"], json!("Tour"));
        assert_eq!(body["wantsNewsletter"], json!(false));
        assert_eq!(body["visitedAt"], json!("2026-04-20T13:00:00Z"));
        assert!(matches!(
            backend.notifier.snapshots().as_slice(),
            [SyncSnapshot::Guests { guests }] if guests.len() == 1
        ));
    }

    #[rstest]
    #[case(json!({ "lastName": "Lee" }))]
    #[case(json!({ "firstName": "Jordan", "lastName": " " }))]
    #[actix_web::test]
    async fn register_rejects_missing_names(#[case] payload: Value) {
        let backend = TestBackend::new();
        let app = actix_test::init_service(backend.app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/guests")
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], json!("Invalid guest data"));
    }

    #[actix_web::test]
    async fn today_excludes_earlier_days() {
        let backend = TestBackend::new();
        let app = actix_test::init_service(backend.app()).await;
        for (index, first_name) in ["Ada", "Grace"].into_iter().enumerate() {
            if index > 0 {
                backend.clock.advance(Duration::from_secs(48 * 60 * 60));
            }
            let request = actix_test::TestRequest::post()
                .uri("/api/guests")
                .set_json(json!({ "firstName": first_name, "lastName": "Visitor" }))
                .to_request();
            actix_test::call_service(&app, request).await;
        }

        let request = actix_test::TestRequest::get().uri("/api/guests").to_request();
        let all: Vec<Value> = actix_test::call_and_read_body_json(&app, request).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/guests/today")
            .to_request();
        let today: Vec<Value> = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(all.len(), 2);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0]["firstName"], json!("Grace"));
    }
}
