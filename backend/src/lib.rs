//! Front-desk check-in tracker.
//!
//! Hexagonal layout: `domain` holds records, attendance rules, and services
//! behind port traits; `outbound` implements the driven ports (in-memory
//! store, webhook notifier); `inbound::http` exposes the REST surface.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
