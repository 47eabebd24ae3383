//! finchat - rule-based conversational responder
//!
//! Receives free-text chat messages over HTTP, matches them against a
//! small set of keyword/state rules, and returns canned replies. Can
//! notify a human agent through an outbound mail gateway.

mod api;
mod dialogue;
mod notifier;
mod session;

use api::{create_router, AppState};
use dialogue::{ContactInfo, ResponseCatalog};
use notifier::{LoggingNotifier, Notifier, NotifyConfig, WebhookNotifier};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finchat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("FINCHAT_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let session_ttl = std::env::var("FINCHAT_SESSION_TTL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map_or(std::time::Duration::from_secs(30 * 60), std::time::Duration::from_secs);

    let contact = ContactInfo::from_env();
    let catalog = ResponseCatalog::new(&contact);

    let notify_config = NotifyConfig::from_env();
    let notifier: Option<Arc<dyn Notifier>> =
        WebhookNotifier::from_config(&notify_config, contact.email.clone()).map(|n| {
            Arc::new(LoggingNotifier::new(Arc::new(n))) as Arc<dyn Notifier>
        });

    if notifier.is_some() {
        tracing::info!(recipient = %contact.email, "Agent notifier configured");
    } else {
        tracing::warn!(
            "No notification endpoint configured. Set FINCHAT_NOTIFY_URL to enable agent \
             escalation delivery."
        );
    }

    // Create application state and router
    let state = AppState::new(catalog, notifier, session_ttl);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("finchat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
