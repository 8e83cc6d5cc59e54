//! Builders wiring the in-memory store and notifier into HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use frontdesk::domain::seed_sample_roster;
use frontdesk::inbound::http::state::HttpState;
use frontdesk::outbound::memory::InMemoryStore;
use frontdesk::outbound::webhook::sync_notifier_for;

use super::ServerConfig;

/// Build handler state over a fresh store.
///
/// # Errors
/// Returns [`std::io::Error`] when the sample roster is invalid or the
/// webhook client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = Arc::new(InMemoryStore::new(clock.clone()));
    if config.seed_sample_data {
        seed_sample_roster(store.as_ref())
            .map_err(|e| std::io::Error::other(format!("sample roster rejected: {e}")))?;
    } else {
        info!("starting with an empty store; set FRONTDESK_SEED_SAMPLE_DATA=true to seed");
    }
    let notifier = sync_notifier_for(config.webhook_url.clone(), config.webhook_timeout)
        .map_err(|e| std::io::Error::other(format!("webhook client setup failed: {e}")))?;
    Ok(HttpState::over_store(store, notifier, clock))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use frontdesk::domain::ports::{EmployeeQuery, VolunteerQuery};
    use rstest::rstest;

    use super::*;

    fn config(seed_sample_data: bool) -> ServerConfig {
        ServerConfig {
            bind_addr: "127.0.0.1:0".parse().expect("valid address"),
            webhook_url: None,
            webhook_timeout: Duration::from_secs(1),
            seed_sample_data,
        }
    }

    #[rstest]
    #[case(false, 0, 0)]
    #[case(true, 5, 3)]
    #[actix_rt::test]
    async fn seeding_follows_the_setting(
        #[case] seed: bool,
        #[case] volunteers: usize,
        #[case] employees: usize,
    ) {
        let state = build_http_state(&config(seed)).expect("state builds");

        let listed = state.volunteers_query.list().await.expect("volunteers");
        assert_eq!(listed.len(), volunteers);
        let listed = state.employees_query.list().await.expect("employees");
        assert_eq!(listed.len(), employees);
    }
}
