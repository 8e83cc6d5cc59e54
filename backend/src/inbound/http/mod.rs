//! HTTP inbound adapter exposing the front-desk REST endpoints.

pub mod csv_export;
pub mod dto;
pub mod employees;
pub mod error;
pub mod guests;
pub mod health;
pub mod reports;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;
pub mod volunteers;

pub use error::ApiResult;

use actix_web::web;

use self::error::{json_error_handler, path_error_handler};

/// Register the `/api` scope with every front-desk route.
///
/// Callers provide `web::Data<HttpState>`; malformed JSON bodies and
/// unparsable path segments are answered with the shared error shape.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(volunteers::list_volunteers)
            .service(volunteers::create_volunteer)
            .service(volunteers::update_volunteer)
            .service(volunteers::delete_volunteer)
            .service(volunteers::list_volunteer_logs)
            .service(volunteers::check_in)
            .service(volunteers::check_out)
            .service(guests::list_guests)
            .service(guests::todays_guests)
            .service(guests::register_guest)
            .service(employees::list_employees)
            .service(employees::create_employee)
            .service(employees::employees_today)
            .service(employees::delete_employee)
            .service(employees::clock_in)
            .service(employees::clock_out)
            .service(reports::dashboard_stats)
            .service(reports::todays_employee_logs)
            .service(reports::export_csv),
    );
}
