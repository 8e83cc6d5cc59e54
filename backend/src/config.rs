//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `FRONTDESK_*` environment variables, configuration files,
//! or command-line flags. Parsing into typed values happens in the accessors
//! so a bad address or URL fails startup with a clear message.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Settings that cannot be turned into usable values.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid sheets webhook URL `{value}`: {source}")]
    WebhookUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Front-desk server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FRONTDESK")]
pub struct FrontDeskSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// Spreadsheet webhook receiving snapshots. Sync is disabled when unset.
    pub sheets_webhook_url: Option<String>,
    /// Request timeout for webhook deliveries, in seconds.
    pub webhook_timeout_secs: Option<u64>,
    /// Seed the sample roster of five volunteers and three employees at
    /// startup. Off by default, so the server starts with an empty store;
    /// set `FRONTDESK_SEED_SAMPLE_DATA=true` to enable.
    #[ortho_config(default = false)]
    pub seed_sample_data: bool,
}

impl FrontDeskSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Parsed webhook URL; `None` or a blank value disables sync.
    pub fn sheets_webhook_url(&self) -> Result<Option<Url>, SettingsError> {
        let Some(value) = self
            .sheets_webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            return Ok(None);
        };
        Url::parse(value)
            .map(Some)
            .map_err(|source| SettingsError::WebhookUrl {
                value: value.to_owned(),
                source,
            })
    }

    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(
            self.webhook_timeout_secs
                .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "FRONTDESK_BIND_ADDR",
        "FRONTDESK_SHEETS_WEBHOOK_URL",
        "FRONTDESK_WEBHOOK_TIMEOUT_SECS",
        "FRONTDESK_SEED_SAMPLE_DATA",
    ];

    fn load_from_empty_args() -> FrontDeskSettings {
        FrontDeskSettings::load_from_iter([OsString::from("frontdesk")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("valid address")
        );
        assert!(
            settings
                .sheets_webhook_url()
                .expect("no url configured")
                .is_none()
        );
        assert_eq!(settings.webhook_timeout(), Duration::from_secs(10));
        assert!(!settings.seed_sample_data);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("FRONTDESK_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "FRONTDESK_SHEETS_WEBHOOK_URL",
                Some("https://script.example.org/exec".to_owned()),
            ),
            ("FRONTDESK_WEBHOOK_TIMEOUT_SECS", Some("3".to_owned())),
            ("FRONTDESK_SEED_SAMPLE_DATA", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("configured address").port(),
            9000
        );
        assert_eq!(
            settings
                .sheets_webhook_url()
                .expect("valid url")
                .map(|url| url.host_str().map(str::to_owned)),
            Some(Some("script.example.org".to_owned()))
        );
        assert_eq!(settings.webhook_timeout(), Duration::from_secs(3));
        assert!(settings.seed_sample_data);
    }

    #[rstest]
    #[case("FRONTDESK_SHEETS_WEBHOOK_URL", "not a url")]
    #[case("FRONTDESK_BIND_ADDR", "localhost")]
    fn malformed_values_are_startup_errors(#[case] name: &'static str, #[case] value: &str) {
        let _guard = lock_env([(name, Some(value.to_owned()))]);

        let settings = load_from_empty_args();

        let failed = settings.bind_addr().is_err() || settings.sheets_webhook_url().is_err();
        assert!(failed, "{name}={value} should be rejected");
    }

    #[rstest]
    fn blank_webhook_url_disables_sync() {
        let _guard = lock_env([("FRONTDESK_SHEETS_WEBHOOK_URL", Some("   ".to_owned()))]);

        let settings = load_from_empty_args();

        assert!(settings.sheets_webhook_url().expect("blank url").is_none());
    }
}
