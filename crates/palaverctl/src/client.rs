//! HTTP client for the palaverd relay API.
//!
//! Both calls are one-shot: any non-success status, malformed payload, or
//! transport failure comes back as a single error with no finer cause for
//! the caller to branch on.

use anyhow::{Context, Result};
use palaver_common::{ChatRequest, ChatResponse, SetKeyRequest, SetKeyResponse};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:3001";

/// Client for the relay daemon.
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve the server address: --server flag, then $PALAVER_SERVER,
    /// then the default.
    pub fn from_flag(server: Option<String>) -> Self {
        let base_url = server
            .or_else(|| std::env::var("PALAVER_SERVER").ok())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());
        Self::new(base_url)
    }

    /// Submit the API key. Succeeds iff the server answers with success.
    pub async fn set_key(&self, api_key: &str) -> Result<String> {
        let url = format!("{}/api/set-key", self.base_url);
        let request = SetKeyRequest {
            api_key: api_key.to_string(),
        };

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to reach the relay server")?;

        if !resp.status().is_success() {
            anyhow::bail!("Set-key request failed ({})", resp.status());
        }

        let body: SetKeyResponse = resp
            .json()
            .await
            .context("Failed to parse set-key response")?;

        Ok(body.message)
    }

    /// Relay one message and return the generated reply.
    pub async fn chat(&self, message: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
        };

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to reach the relay server")?;

        if !resp.status().is_success() {
            anyhow::bail!("Chat request failed ({})", resp.status());
        }

        let body: ChatResponse = resp
            .json()
            .await
            .context("Failed to parse chat response")?;

        Ok(body.reply)
    }
}
