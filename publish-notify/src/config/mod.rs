//! Runtime configuration.
//!
//! Values are loaded once at startup and passed explicitly to the notifier;
//! nothing below this module reads the process environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::url::trim_base_url;
use crate::{Error, Result};

/// Environment variable holding the Discord webhook URL.
pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";
/// Environment variable holding the public site URL.
pub const SITE_URL_ENV: &str = "SITE_URL";
/// Environment variable holding the optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "NOTIFY_TIMEOUT_SECS";

/// Notifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Messaging endpoint. `None` disables delivery without failing.
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Public site URL used for links, without trailing slash.
    pub site_url: String,
    /// Request timeout in seconds. `None` leaves requests unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl NotifyConfig {
    pub fn new(site_url: impl AsRef<str>) -> Self {
        Self {
            webhook_url: None,
            site_url: trim_base_url(site_url.as_ref()).to_string(),
            request_timeout_secs: None,
        }
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.webhook_url = (!url.trim().is_empty()).then_some(url);
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Load from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = lookup(SITE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{} is not set", SITE_URL_ENV)))?;

        let mut config = Self::new(site_url);

        if let Some(url) = lookup(WEBHOOK_URL_ENV) {
            config = config.with_webhook_url(url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    TIMEOUT_ENV, raw
                ))
            })?;
            if secs > 0 {
                config = config.with_request_timeout(secs);
            }
        }

        Ok(config)
    }

    /// Request timeout for the webhook client.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Check if a webhook endpoint is configured.
    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }
}
