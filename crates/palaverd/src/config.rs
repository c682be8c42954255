//! Daemon configuration, read from the process environment.

use crate::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Port the relay listens on unless $PALAVER_PORT says otherwise.
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on ($PALAVER_PORT).
    pub port: u16,
    /// Generation model name ($PALAVER_MODEL).
    pub model: String,
    /// Base URL of the generative language API ($PALAVER_API_BASE).
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PALAVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let model =
            std::env::var("PALAVER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_base =
            std::env::var("PALAVER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self {
            port,
            model,
            api_base,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
