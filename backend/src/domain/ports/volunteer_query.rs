//! Driving port for volunteer reads.

use async_trait::async_trait;

use crate::domain::{Error, Volunteer, VolunteerId, VolunteerLog};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerQuery: Send + Sync {
    /// All volunteers in creation order.
    async fn list(&self) -> Result<Vec<Volunteer>, Error>;

    /// Logs for one volunteer; not found when the volunteer is missing.
    async fn volunteer_logs(&self, id: VolunteerId) -> Result<Vec<VolunteerLog>, Error>;
}
