//! Agent notification transport
//!
//! Outbound, best-effort delivery of "a user wants a human" messages to
//! the operator's address. Transport failure is logged by the caller and
//! never changes the reply the end user receives.

mod webhook;

pub use webhook::{NotifyConfig, WebhookNotifier};

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Common interface for notification transports
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification containing the triggering user text
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Notification error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NotifyError {
    pub kind: NotifyErrorKind,
    pub message: String,
}

impl NotifyError {
    pub fn new(kind: NotifyErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::Network, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::Auth, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::ServerError, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::InvalidRequest, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::Unknown, message)
    }
}

/// Error classification for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyErrorKind {
    /// Network issues, timeouts
    Network,
    /// Authentication failed (401, 403)
    Auth,
    /// Gateway error (5xx)
    ServerError,
    /// Bad request (400)
    InvalidRequest,
    /// Unknown error
    Unknown,
}

/// Logging wrapper for notification transports
pub struct LoggingNotifier {
    inner: Arc<dyn Notifier>,
}

impl LoggingNotifier {
    pub fn new(inner: Arc<dyn Notifier>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let start = std::time::Instant::now();
        let result = self.inner.notify(message).await;
        let duration = start.elapsed();

        match &result {
            Ok(()) => {
                tracing::info!(
                    duration_ms = %duration.as_millis(),
                    "Agent notified"
                );
            }
            Err(e) => {
                tracing::error!(
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Agent notification failed"
                );
            }
        }

        result
    }
}
