//! Driven port pushing full data snapshots to an external spreadsheet.

use async_trait::async_trait;

use crate::domain::SyncSnapshot;

use super::define_port_error;

define_port_error! {
    /// Errors raised by sync notifier adapters.
    pub enum SyncNotifierError {
        /// The request could not be delivered.
        Transport { message: String } => "sync request failed: {message}",
        /// The endpoint answered with a non-success status.
        Rejected { status: u16 } => "sync endpoint rejected snapshot with status {status}",
        /// The snapshot could not be encoded.
        Encode { message: String } => "sync snapshot could not be encoded: {message}",
    }
}

/// One-way, at-most-once delivery of a snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyncNotifier: Send + Sync {
    async fn notify(&self, snapshot: &SyncSnapshot) -> Result<(), SyncNotifierError>;
}

/// Notifier used when no destination is configured. Sends nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSyncNotifier;

#[async_trait]
impl SyncNotifier for NoOpSyncNotifier {
    async fn notify(&self, _snapshot: &SyncSnapshot) -> Result<(), SyncNotifierError> {
        Ok(())
    }
}
