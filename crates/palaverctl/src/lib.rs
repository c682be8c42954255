//! Palaver Control - terminal chat client for the palaver relay
//!
//! The session module owns the conversation state machine; the client
//! module speaks the relay's HTTP contract; the repl module wires both to
//! the terminal.

pub mod cli;
pub mod client;
pub mod repl;
pub mod session;
