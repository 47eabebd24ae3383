//! HTTP mail-gateway notification transport

use super::{Notifier, NotifyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);
const NOTIFY_SUBJECT: &str = "User Request to Connect with an Agent";

/// Transport configuration, read from the environment
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    /// Mail-gateway endpoint, e.g. `https://mail.example.com/v1/send`
    pub endpoint: Option<String>,
    /// Bearer token for the gateway
    pub token: Option<String>,
}

impl NotifyConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("FINCHAT_NOTIFY_URL").ok(),
            token: std::env::var("FINCHAT_NOTIFY_TOKEN").ok(),
        }
    }
}

/// Delivers notifications by POSTing a JSON message to a mail gateway
pub struct WebhookNotifier {
    client: Client,
    endpoint: String,
    token: Option<String>,
    recipient: String,
}

impl WebhookNotifier {
    /// Build a notifier from config; `None` if no endpoint is configured.
    pub fn from_config(config: &NotifyConfig, recipient: impl Into<String>) -> Option<Self> {
        let endpoint = config.endpoint.clone()?;
        let client = Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Some(Self {
            client,
            endpoint,
            token: config.token.clone(),
            recipient: recipient.into(),
        })
    }

    fn classify_error(status: reqwest::StatusCode, body: &str) -> NotifyError {
        match status.as_u16() {
            401 | 403 => NotifyError::auth(format!("Authentication failed: {body}")),
            400 => NotifyError::invalid_request(format!("Invalid request: {body}")),
            500..=599 => NotifyError::server_error(format!("Gateway error: {body}")),
            _ => NotifyError::unknown(format!("HTTP {status}: {body}")),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let payload = NotifyPayload {
            to: &self.recipient,
            subject: NOTIFY_SUBJECT,
            body: format!(
                "A user requested to connect with an agent.🛎️\n\nUser Message:\n{message}"
            ),
        };

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                NotifyError::network(format!("Request timeout: {e}"))
            } else if e.is_connect() {
                NotifyError::network(format!("Connection failed: {e}"))
            } else {
                NotifyError::unknown(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, &body));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct NotifyPayload<'a> {
    to: &'a str,
    subject: &'a str,
    body: String,
}
