//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};

use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;
use crate::test_support::{MutableClock, RecordingSyncNotifier};

/// In-memory wiring shared by handler tests.
pub struct TestBackend {
    pub clock: Arc<MutableClock>,
    pub notifier: Arc<RecordingSyncNotifier>,
    pub store: Arc<InMemoryStore>,
    pub state: HttpState,
}

/// Fixed instant the test clock starts at.
pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 20, 13, 0, 0)
        .single()
        .expect("valid timestamp")
}

impl TestBackend {
    pub fn new() -> Self {
        let clock = Arc::new(MutableClock::new(test_start()));
        let notifier = Arc::new(RecordingSyncNotifier::default());
        let store = Arc::new(InMemoryStore::new(clock.clone()));
        let state = HttpState::over_store(store.clone(), notifier.clone(), clock.clone());
        Self {
            clock,
            notifier,
            store,
            state,
        }
    }

    /// Build an app serving the whole `/api` surface over this backend.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .configure(configure)
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}
