//! Palaver Daemon - credential-gated chat relay
//!
//! Accepts an API key over HTTP, then relays chat messages to the Gemini
//! generateContent endpoint one at a time.

use anyhow::Result;
use palaverd::config::Config;
use palaverd::server::{self, AppState};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Palaver relay v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    info!("Relaying to model {}", config.model);

    server::run(AppState::new(config)).await
}
