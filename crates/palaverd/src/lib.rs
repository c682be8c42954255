//! Palaver Daemon - credential-gated chat relay
//!
//! Holds one API key at a time and forwards single chat messages to the
//! external generation API. No conversation history crosses the relay;
//! every request is an independent turn.

pub mod config;
pub mod gemini;
pub mod routes;
pub mod server;
