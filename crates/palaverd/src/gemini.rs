//! Gemini API access - build a client handle from one key and relay
//! single prompts to generateContent.

use palaver_common::RelayError;
use serde_json::Value;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Handle for the external generation service.
///
/// One handle per configured key; replacing the key means building a new
/// handle, never mutating this one.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    /// Send one prompt and return the generated text.
    ///
    /// Every failure mode on this path collapses into `RelayError::Generation`;
    /// the detail string is kept for the server log only.
    pub async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Generation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(RelayError::Generation(format!(
                "upstream returned {status}: {text}"
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| RelayError::Generation(format!("malformed response: {e}")))?;

        extract_reply(&json)
            .ok_or_else(|| RelayError::Generation("no text in response candidates".to_string()))
    }
}

/// Pull the first candidate's text out of a generateContent response.
fn extract_reply(json: &Value) -> Option<String> {
    json.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}
