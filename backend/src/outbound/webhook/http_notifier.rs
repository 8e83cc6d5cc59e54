//! Reqwest-backed sync notifier posting snapshots to a webhook.
//!
//! The adapter owns transport concerns only: payload encoding, the request
//! timeout, and mapping HTTP failures onto [`SyncNotifierError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::SnapshotPayload;
use crate::domain::SyncSnapshot;
use crate::domain::ports::{SyncNotifier, SyncNotifierError};

/// Sync notifier that POSTs one JSON document per snapshot.
pub struct WebhookSyncNotifier {
    client: Client,
    endpoint: Url,
}

impl WebhookSyncNotifier {
    /// Build a notifier with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SyncNotifier for WebhookSyncNotifier {
    async fn notify(&self, snapshot: &SyncSnapshot) -> Result<(), SyncNotifierError> {
        let body = serde_json::to_vec(&SnapshotPayload::from(snapshot))
            .map_err(|error| SyncNotifierError::encode(error.to_string()))?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|error| SyncNotifierError::transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncNotifierError::rejected(status.as_u16()));
        }
        Ok(())
    }
}
