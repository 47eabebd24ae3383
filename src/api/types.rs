//! API request and response types

use crate::dialogue::MenuState;
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing or empty messages are treated as empty input, never an error
    #[serde(default)]
    pub message: Option<String>,
    /// Absent on first contact; the server generates one
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response to a chat message
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub state: MenuState,
}

/// Request to notify an agent directly
#[derive(Debug, Deserialize)]
pub struct NotifyAgentRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Plain bot message, used for acknowledgements and hints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub response: String,
}

/// Crate version info
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
