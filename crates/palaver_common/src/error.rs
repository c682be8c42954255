//! Error types for the relay.

use thiserror::Error;

/// Structured failure kinds the daemon reports.
///
/// The `Generation` detail string is for the server log only; the wire body
/// always carries the fixed generic message.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("API key not set")]
    NotConfigured,

    #[error("generation failed: {0}")]
    Generation(String),
}

impl RelayError {
    /// HTTP status the daemon answers with for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::NotConfigured => 400,
            RelayError::Generation(_) => 500,
        }
    }
}
