//! Request and response bodies for the relay API.
//!
//! Field names are camelCase on the wire so browser clients can speak the
//! same contract without a translation layer.

use serde::{Deserialize, Serialize};

/// Confirmation returned by POST /api/set-key.
pub const KEY_SET_MESSAGE: &str = "API key set successfully";

/// Error body returned when a relay is attempted before any key is set.
pub const KEY_NOT_SET_ERROR: &str = "API key not set";

/// Error body returned when the upstream generation call fails.
pub const GENERATION_ERROR: &str = "An error occurred while processing your request";

/// Assistant turn shown by the client when a relay call fails.
pub const FALLBACK_REPLY: &str = "An error occurred. Please try again.";

/// Body of POST /api/set-key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetKeyRequest {
    pub api_key: String,
}

/// Success body of POST /api/set-key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetKeyResponse {
    pub message: String,
}

/// Body of POST /api/chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Success body of POST /api/chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Failure body for any relay endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
