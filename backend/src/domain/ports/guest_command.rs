//! Driving port for guest registration.

use async_trait::async_trait;

use crate::domain::{Error, Guest, NewGuest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestCommand: Send + Sync {
    /// Record a visit happening now.
    async fn register(&self, draft: NewGuest) -> Result<Guest, Error>;
}
