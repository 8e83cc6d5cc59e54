//! Driving port for volunteer mutations and attendance transitions.

use async_trait::async_trait;

use crate::domain::{Error, NewVolunteer, Volunteer, VolunteerId, VolunteerUpdate};

/// Volunteer mutations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerCommand: Send + Sync {
    async fn create(&self, draft: NewVolunteer) -> Result<Volunteer, Error>;

    /// Apply a partial update. Fails when the volunteer is missing or the
    /// result would break the attendance invariant.
    async fn update(&self, id: VolunteerId, update: VolunteerUpdate) -> Result<Volunteer, Error>;

    /// Delete a volunteer and its logs.
    async fn delete(&self, id: VolunteerId) -> Result<(), Error>;

    /// Mark the volunteer present and log a check-in.
    async fn check_in(&self, id: VolunteerId) -> Result<Volunteer, Error>;

    /// Mark the volunteer absent and log a check-out with minutes worked.
    async fn check_out(
        &self,
        id: VolunteerId,
        activity: Option<String>,
    ) -> Result<Volunteer, Error>;
}
