//! Outbound webhook call.
//!
//! [`WebhookTransport`] is the only place where a notification leaves the
//! process. Everything upstream of it is pure, so tests swap in a recording
//! implementation instead of talking to a server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::utils::http_client::build_webhook_client;

/// JSON body posted to the messaging endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub content: String,
}

impl WebhookPayload {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Response of an accepted webhook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for the outbound webhook call.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Post `payload` to `url` once.
    ///
    /// Returns an error for network failures and for non-success statuses.
    async fn post(&self, url: &str, payload: &WebhookPayload) -> Result<WebhookResponse>;
}

/// HTTP transport backed by `reqwest`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport. `None` means no request timeout.
    pub fn new(request_timeout: Option<Duration>) -> Self {
        Self {
            client: build_webhook_client(request_timeout),
        }
    }

    /// Create a transport around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post(&self, url: &str, payload: &WebhookPayload) -> Result<WebhookResponse> {
        let response = self.client.post(url).json(payload).send().await?;

        let status = response.status();
        let body = response_body(status.as_u16(), response.text().await);

        if !status.is_success() {
            return Err(crate::Error::webhook(status.as_u16(), body));
        }

        debug!(status = status.as_u16(), "Webhook accepted notification");
        Ok(WebhookResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Resolve the response body, keeping the read error as text if it failed.
///
/// For rejected requests the body doubles as the error message, so a read
/// failure must not leave it blank.
fn response_body<E: std::fmt::Display>(
    status: u16,
    body: std::result::Result<String, E>,
) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            debug!(status, error = %e, "Failed to read webhook response body");
            format!("<failed to read body: {}>", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_payload_shape() {
        let payload = WebhookPayload::new("hello");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "content": "hello" })
        );
    }

    #[test]
    fn test_response_body_keeps_read_error() {
        assert_eq!(response_body::<String>(200, Ok("ok".to_string())), "ok");
        assert_eq!(
            response_body(502, Err("connection reset")),
            "<failed to read body: connection reset>"
        );
    }

    #[tokio::test]
    async fn test_post_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/webhooks/1/abc"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "content": "hello" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(None);
        let url = format!("{}/api/webhooks/1/abc", mock_server.uri());
        let response = transport
            .post(&url, &WebhookPayload::new("hello"))
            .await
            .unwrap();

        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_post_rejected_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid payload"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(Some(Duration::from_secs(5)));
        let err = transport
            .post(&mock_server.uri(), &WebhookPayload::new("hello"))
            .await
            .unwrap_err();

        match err {
            crate::Error::Webhook { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid payload");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_post_network_failure() {
        let transport = ReqwestTransport::new(Some(Duration::from_secs(5)));
        let err = transport
            .post("http://127.0.0.1:9/unreachable", &WebhookPayload::new("hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::Error::Http(_)));
        assert!(err.is_transport());
    }
}
