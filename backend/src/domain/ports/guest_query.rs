//! Driving port for guest reads.

use async_trait::async_trait;

use crate::domain::{Error, Guest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Guest>, Error>;

    /// Visits recorded during the current local day.
    async fn today(&self) -> Result<Vec<Guest>, Error>;
}
