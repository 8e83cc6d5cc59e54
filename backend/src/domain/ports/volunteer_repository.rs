//! Driven port for volunteer and volunteer log storage.

use crate::domain::{
    NewVolunteer, NewVolunteerLog, Volunteer, VolunteerId, VolunteerLog, VolunteerLogId,
    VolunteerUpdate,
};

/// Storage of volunteers and their attendance logs.
///
/// Adapters assign identifiers and timestamps. They never validate payloads;
/// that is the caller's job.
#[cfg_attr(test, mockall::automock)]
pub trait VolunteerRepository: Send + Sync {
    /// Store a new volunteer and return it with its assigned id.
    fn create_volunteer(&self, draft: NewVolunteer) -> Volunteer;

    /// Find a volunteer by id.
    fn find_volunteer(&self, id: VolunteerId) -> Option<Volunteer>;

    /// All volunteers in creation order.
    fn list_volunteers(&self) -> Vec<Volunteer>;

    /// Merge `update` into the stored volunteer; `None` when absent.
    fn update_volunteer(&self, id: VolunteerId, update: &VolunteerUpdate) -> Option<Volunteer>;

    /// Delete a volunteer together with every log referencing it.
    ///
    /// Returns whether the volunteer existed.
    fn delete_volunteer(&self, id: VolunteerId) -> bool;

    /// Append a log entry stamped with the current time.
    fn append_volunteer_log(&self, draft: NewVolunteerLog) -> VolunteerLog;

    /// Logs in creation order, optionally restricted to one volunteer.
    fn list_volunteer_logs(&self, volunteer_id: Option<VolunteerId>) -> Vec<VolunteerLog>;

    /// Delete a single log entry. Returns whether it existed.
    fn delete_volunteer_log(&self, id: VolunteerLogId) -> bool;
}
