//! Volunteer domain service.
//!
//! Implements the volunteer driving ports on top of a [`VolunteerRepository`]
//! and pushes the full volunteer snapshot to the sync notifier after every
//! mutation.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::attendance::{check_in_update, check_out_update};
use crate::domain::ports::{SyncNotifier, VolunteerCommand, VolunteerQuery, VolunteerRepository};
use crate::domain::sync::{SyncSnapshot, publish};
use crate::domain::{
    Error, NewVolunteer, NewVolunteerLog, Volunteer, VolunteerId, VolunteerLog, VolunteerUpdate,
};

const NOT_FOUND: &str = "Volunteer not found";
const INVALID: &str = "Invalid volunteer data";

/// Volunteer service implementing [`VolunteerCommand`] and [`VolunteerQuery`].
#[derive(Clone)]
pub struct VolunteerService<R> {
    repo: Arc<R>,
    notifier: Arc<dyn SyncNotifier>,
    clock: Arc<dyn Clock>,
}

impl<R> VolunteerService<R> {
    pub fn new(repo: Arc<R>, notifier: Arc<dyn SyncNotifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            notifier,
            clock,
        }
    }
}

impl<R> VolunteerService<R>
where
    R: VolunteerRepository,
{
    fn require(&self, id: VolunteerId) -> Result<Volunteer, Error> {
        self.repo
            .find_volunteer(id)
            .ok_or_else(|| Error::not_found(NOT_FOUND))
    }

    fn apply(&self, id: VolunteerId, update: &VolunteerUpdate) -> Result<Volunteer, Error> {
        self.repo
            .update_volunteer(id, update)
            .ok_or_else(|| Error::not_found(NOT_FOUND))
    }

    async fn sync(&self) {
        let snapshot = SyncSnapshot::Volunteers {
            volunteers: self.repo.list_volunteers(),
            logs: self.repo.list_volunteer_logs(None),
        };
        publish(self.notifier.as_ref(), snapshot).await;
    }
}

#[async_trait]
impl<R> VolunteerCommand for VolunteerService<R>
where
    R: VolunteerRepository,
{
    async fn create(&self, draft: NewVolunteer) -> Result<Volunteer, Error> {
        let volunteer = self.repo.create_volunteer(draft);
        info!(volunteer_id = %volunteer.id, "volunteer registered");
        self.sync().await;
        Ok(volunteer)
    }

    async fn update(&self, id: VolunteerId, update: VolunteerUpdate) -> Result<Volunteer, Error> {
        let update = update
            .validated()
            .map_err(|_| Error::invalid_request(INVALID))?;
        let existing = self.require(id)?;
        update
            .applied_to(&existing)
            .validate_attendance()
            .map_err(|_| Error::invalid_request(INVALID))?;

        let volunteer = self.apply(id, &update)?;
        self.sync().await;
        Ok(volunteer)
    }

    async fn delete(&self, id: VolunteerId) -> Result<(), Error> {
        if !self.repo.delete_volunteer(id) {
            return Err(Error::not_found(NOT_FOUND));
        }
        info!(volunteer_id = %id, "volunteer deleted");
        self.sync().await;
        Ok(())
    }

    async fn check_in(&self, id: VolunteerId) -> Result<Volunteer, Error> {
        self.require(id)?;
        let volunteer = self.apply(id, &check_in_update(self.clock.utc()))?;
        self.repo.append_volunteer_log(NewVolunteerLog::check_in(id));
        info!(volunteer_id = %id, "volunteer checked in");
        self.sync().await;
        Ok(volunteer)
    }

    async fn check_out(
        &self,
        id: VolunteerId,
        activity: Option<String>,
    ) -> Result<Volunteer, Error> {
        let existing = self.require(id)?;
        let (update, minutes) = check_out_update(&existing, self.clock.utc());
        let volunteer = self.apply(id, &update)?;
        self.repo.append_volunteer_log(NewVolunteerLog::check_out(
            id,
            activity.as_deref(),
            minutes,
        ));
        info!(volunteer_id = %id, minutes, "volunteer checked out");
        self.sync().await;
        Ok(volunteer)
    }
}

#[async_trait]
impl<R> VolunteerQuery for VolunteerService<R>
where
    R: VolunteerRepository,
{
    async fn list(&self) -> Result<Vec<Volunteer>, Error> {
        Ok(self.repo.list_volunteers())
    }

    async fn volunteer_logs(&self, id: VolunteerId) -> Result<Vec<VolunteerLog>, Error> {
        self.require(id)?;
        Ok(self.repo.list_volunteer_logs(Some(id)))
    }
}

#[cfg(test)]
#[path = "volunteer_service_tests.rs"]
mod tests;
