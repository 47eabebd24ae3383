//! HTTP request handlers

use super::pages::{CHAT_UI_HTML, HOME_HTML};
use super::types::{
    ChatRequest, ChatResponse, MessageResponse, NotifyAgentRequest, VersionResponse,
};
use super::AppState;
use crate::dialogue::{respond, Effect, Turn};
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/chat_ui", get(chat_ui))
        .route("/chat", get(chat_hint).post(chat))
        .route("/notify_agent", post(notify_agent))
        .route("/version", get(get_version))
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html(HOME_HTML)
}

async fn chat_ui() -> Html<&'static str> {
    Html(CHAT_UI_HTML)
}

async fn chat_hint() -> Json<MessageResponse> {
    Json(MessageResponse {
        response: "Please use POST method to interact with the chatbot.".to_string(),
    })
}

/// One dialogue turn. A missing message is treated as empty input and
/// routed to the fallback, never rejected. A missing session id means
/// first contact; the server assigns one and returns it.
async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let session_id = req
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let message = req.message.unwrap_or_default();

    let turn: Turn = state
        .sessions
        .with_session(&session_id, |menu| {
            let turn = respond(*menu, &state.catalog, &message);
            *menu = turn.next_state;
            turn
        })
        .await;

    tracing::debug!(
        session_id = %session_id,
        state = turn.next_state.label(),
        effects = turn.effects.len(),
        "Dialogue turn"
    );

    dispatch_effects(&state, &session_id, turn.effects);

    Json(ChatResponse {
        response: turn.reply,
        session_id,
        state: turn.next_state,
    })
}

/// Direct notification endpoint, bypassing the dialogue flow
async fn notify_agent(
    State(state): State<AppState>,
    Json(req): Json<NotifyAgentRequest>,
) -> Json<MessageResponse> {
    let Some(message) = req.message.filter(|m| !m.trim().is_empty()) else {
        return Json(MessageResponse {
            response: "Please provide a valid message to notify the agent.".to_string(),
        });
    };

    dispatch_notification(&state, "direct", message);

    Json(MessageResponse {
        response: "Your request has been sent to our agent. We'll get back to you shortly."
            .to_string(),
    })
}

async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Execute the effects of a turn. Runs after the reply has been
/// computed, so no effect can change or delay the user-facing response.
fn dispatch_effects(state: &AppState, session_id: &str, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::NotifyAgent { message } => dispatch_notification(state, session_id, message),
        }
    }
}

/// Fire-and-forget notification dispatch. Transport failure is logged
/// and swallowed.
fn dispatch_notification(state: &AppState, session_id: &str, message: String) {
    let Some(notifier) = state.notifier.clone() else {
        tracing::warn!(
            session_id = %session_id,
            "Agent notification requested but no transport is configured"
        );
        return;
    };

    let session_id = session_id.to_string();
    tokio::spawn(async move {
        if let Err(e) = notifier.notify(&message).await {
            tracing::error!(
                session_id = %session_id,
                error = %e,
                "Agent notification failed"
            );
        }
    });
}
