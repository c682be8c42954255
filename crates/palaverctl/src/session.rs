//! Conversation state for one running client.
//!
//! The optimistic update is split into two explicit transitions:
//! `begin_message` appends the user turn and marks a request in flight,
//! `resolve_reply` appends the assistant turn (or the fallback) and clears
//! the flag. The async submit drivers compose the two around a relay call,
//! so rendering code can observe the in-flight state between them.

use crate::client::RelayClient;
use anyhow::Result;
use palaver_common::FALLBACK_REPLY;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub text: String,
    pub sender: Sender,
}

/// Client-local conversation state. Append-only turn list; at most one
/// request in flight.
#[derive(Debug, Default)]
pub struct Session {
    turns: Vec<Turn>,
    pending_input: String,
    credential_configured: bool,
    request_in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn credential_configured(&self) -> bool {
        self.credential_configured
    }

    pub fn request_in_flight(&self) -> bool {
        self.request_in_flight
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Mark the credential as accepted. One-way; there is no transition
    /// back to unconfigured for the life of the session.
    pub fn credential_accepted(&mut self) {
        self.credential_configured = true;
    }

    /// First phase of a send: append the user turn, clear the pending
    /// buffer, and mark the request in flight. Returns the trimmed text to
    /// relay, or None if the input is blank or a request is already
    /// outstanding.
    pub fn begin_message(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.request_in_flight {
            return None;
        }

        let trimmed = trimmed.to_string();
        self.turns.push(Turn {
            text: trimmed.clone(),
            sender: Sender::User,
        });
        self.pending_input.clear();
        self.request_in_flight = true;
        Some(trimmed)
    }

    /// Second phase: fold the relay outcome back in. A failed relay still
    /// appends a visible turn, so the conversation never stalls silently.
    pub fn resolve_reply(&mut self, outcome: Result<String>) {
        let text = outcome.unwrap_or_else(|_| FALLBACK_REPLY.to_string());
        self.turns.push(Turn {
            text,
            sender: Sender::Assistant,
        });
        self.request_in_flight = false;
    }

    /// Send one message through the relay and fold the reply into the
    /// conversation. Returns the appended assistant turn, or None if the
    /// input was a no-op.
    pub async fn submit_message(&mut self, relay: &RelayClient, text: &str) -> Option<&Turn> {
        let message = self.begin_message(text)?;
        let outcome = relay.chat(&message).await;
        self.resolve_reply(outcome);
        self.turns.last()
    }

    /// Configure the credential through the relay. The session only moves
    /// to configured once the server confirms; on failure the state is left
    /// unchanged and the error is returned for display. Returns Ok(false)
    /// for blank input (a no-op).
    pub async fn submit_credential(&mut self, relay: &RelayClient, value: &str) -> Result<bool> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        relay.set_key(trimmed).await?;
        self.credential_accepted();
        Ok(true)
    }
}
