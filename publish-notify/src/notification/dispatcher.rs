//! Single-shot delivery of rendered notification text.

use std::sync::Arc;

use tracing::{error, info};

use super::transport::{WebhookPayload, WebhookResponse, WebhookTransport};
use crate::Result;

/// Result of a dispatch that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No endpoint is configured; nothing was sent.
    Skipped,
    /// The endpoint accepted the message.
    Sent(WebhookResponse),
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Sends notification text to the messaging endpoint.
///
/// Holds no per-record state, so one dispatcher can serve concurrent
/// invocations. Each call makes at most one outbound request and never
/// retries.
#[derive(Clone)]
pub struct NotificationDispatcher {
    transport: Arc<dyn WebhookTransport>,
}

impl NotificationDispatcher {
    pub fn new(transport: Arc<dyn WebhookTransport>) -> Self {
        Self { transport }
    }

    /// Post `text` to `endpoint_url`.
    ///
    /// A missing or blank endpoint is not an error: the call is skipped and
    /// logged. Transport failures are logged and returned to the caller.
    pub async fn dispatch(
        &self,
        endpoint_url: Option<&str>,
        text: &str,
    ) -> Result<DispatchOutcome> {
        let Some(url) = endpoint_url.map(str::trim).filter(|url| !url.is_empty()) else {
            info!("No webhook URL configured, skipping notification");
            return Ok(DispatchOutcome::Skipped);
        };

        let payload = WebhookPayload::new(text);
        match self.transport.post(url, &payload).await {
            Ok(response) => {
                info!(status = response.status, "Notification posted");
                Ok(DispatchOutcome::Sent(response))
            }
            Err(e) => {
                error!(error = %e, "Failed to post notification");
                Err(e)
            }
        }
    }
}
