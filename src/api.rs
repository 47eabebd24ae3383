//! HTTP API for the chatbot

mod handlers;
mod pages;
mod types;

pub use handlers::create_router;

use crate::dialogue::ResponseCatalog;
use crate::notifier::Notifier;
use crate::session::SessionStore;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub catalog: Arc<ResponseCatalog>,
    /// Absent when no notification endpoint is configured
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl AppState {
    pub fn new(
        catalog: ResponseCatalog,
        notifier: Option<Arc<dyn Notifier>>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(session_ttl)),
            catalog: Arc::new(catalog),
            notifier,
        }
    }
}
