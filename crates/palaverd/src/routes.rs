//! API routes for palaverd

use crate::gemini::GeminiClient;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use palaver_common::{
    ChatRequest, ChatResponse, ErrorResponse, RelayError, SetKeyRequest, SetKeyResponse,
    GENERATION_ERROR, KEY_NOT_SET_ERROR, KEY_SET_MESSAGE,
};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

pub fn relay_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/set-key", post(set_key))
        .route("/api/chat", post(chat))
}

/// Store a fresh client handle built from the submitted key, replacing any
/// prior one. Always succeeds; key validity is discovered on first relay.
async fn set_key(
    State(state): State<AppStateArc>,
    Json(req): Json<SetKeyRequest>,
) -> Json<SetKeyResponse> {
    let client = GeminiClient::new(req.api_key, &state.config.model, &state.config.api_base);
    *state.gemini.write().await = Some(client);
    info!("API key configured");

    Json(SetKeyResponse {
        message: KEY_SET_MESSAGE.to_string(),
    })
}

/// Forward one message to the generation API and return its text verbatim.
async fn chat(
    State(state): State<AppStateArc>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Clone the handle out so a slow upstream call never holds the slot lock.
    let client = state
        .gemini
        .read()
        .await
        .clone()
        .ok_or_else(|| reject(RelayError::NotConfigured))?;

    info!("Relaying message ({} chars)", req.message.len());

    match client.generate(&req.message).await {
        Ok(reply) => Ok(Json(ChatResponse { reply })),
        Err(e) => {
            error!("Generation failed: {e}");
            Err(reject(e))
        }
    }
}

fn reject(err: RelayError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match err {
        RelayError::NotConfigured => KEY_NOT_SET_ERROR,
        RelayError::Generation(_) => GENERATION_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
