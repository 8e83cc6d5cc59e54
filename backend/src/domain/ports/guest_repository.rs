//! Driven port for guest visit storage.

use crate::domain::{Guest, GuestId, NewGuest};

/// Storage of guest visits.
#[cfg_attr(test, mockall::automock)]
pub trait GuestRepository: Send + Sync {
    /// Store a visit stamped with the current time.
    fn create_guest(&self, draft: NewGuest) -> Guest;

    fn find_guest(&self, id: GuestId) -> Option<Guest>;

    /// All visits in creation order.
    fn list_guests(&self) -> Vec<Guest>;

    /// Visits whose `visited_at` falls within the current local day.
    fn todays_guests(&self) -> Vec<Guest>;

    /// Returns whether the visit existed.
    fn delete_guest(&self, id: GuestId) -> bool;
}
