//! HTTP server for palaverd

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// The single credential slot; each set-key replaces the whole handle.
    pub gemini: RwLock<Option<GeminiClient>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            gemini: RwLock::new(None),
            config,
        }
    }
}

/// Build the router with the browser-facing layers attached.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::relay_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server
pub async fn run(state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
