//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use frontdesk::config::{FrontDeskSettings, SettingsError};
use url::Url;

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) webhook_url: Option<Url>,
    pub(crate) webhook_timeout: Duration,
    pub(crate) seed_sample_data: bool,
}

impl ServerConfig {
    /// Resolve typed values from loaded settings.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the bind address or webhook URL is
    /// malformed.
    pub fn from_settings(settings: &FrontDeskSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            webhook_url: settings.sheets_webhook_url()?,
            webhook_timeout: settings.webhook_timeout(),
            seed_sample_data: settings.seed_sample_data,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
