//! Spreadsheet webhook sync adapter.
//!
//! Provides a reqwest implementation of the `SyncNotifier` port and picks the
//! no-op notifier when no webhook is configured.

mod dto;
mod http_notifier;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::info;

pub use http_notifier::WebhookSyncNotifier;

use crate::domain::ports::{NoOpSyncNotifier, SyncNotifier};

/// Build the notifier for an optional webhook endpoint.
///
/// # Errors
///
/// Returns an error when the reqwest client cannot be constructed.
pub fn sync_notifier_for(
    endpoint: Option<Url>,
    timeout: Duration,
) -> Result<Arc<dyn SyncNotifier>, reqwest::Error> {
    match endpoint {
        Some(endpoint) => {
            info!(host = endpoint.host_str().unwrap_or_default(), "spreadsheet sync enabled");
            Ok(Arc::new(WebhookSyncNotifier::new(endpoint, timeout)?))
        }
        None => {
            info!("no spreadsheet webhook configured; sync disabled");
            Ok(Arc::new(NoOpSyncNotifier))
        }
    }
}
