//! Guest domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{GuestCommand, GuestQuery, GuestRepository, SyncNotifier};
use crate::domain::sync::{SyncSnapshot, publish};
use crate::domain::{Error, Guest, NewGuest};

/// Guest service implementing [`GuestCommand`] and [`GuestQuery`].
#[derive(Clone)]
pub struct GuestService<R> {
    repo: Arc<R>,
    notifier: Arc<dyn SyncNotifier>,
}

impl<R> GuestService<R> {
    pub fn new(repo: Arc<R>, notifier: Arc<dyn SyncNotifier>) -> Self {
        Self { repo, notifier }
    }
}

#[async_trait]
impl<R> GuestCommand for GuestService<R>
where
    R: GuestRepository,
{
    async fn register(&self, draft: NewGuest) -> Result<Guest, Error> {
        let guest = self.repo.create_guest(draft);
        info!(guest_id = %guest.id, "guest visit registered");
        let snapshot = SyncSnapshot::Guests {
            guests: self.repo.list_guests(),
        };
        publish(self.notifier.as_ref(), snapshot).await;
        Ok(guest)
    }
}

#[async_trait]
impl<R> GuestQuery for GuestService<R>
where
    R: GuestRepository,
{
    async fn list(&self) -> Result<Vec<Guest>, Error> {
        Ok(self.repo.list_guests())
    }

    async fn today(&self) -> Result<Vec<Guest>, Error> {
        Ok(self.repo.todays_guests())
    }
}
