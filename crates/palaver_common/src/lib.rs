//! Palaver Common - shared wire contract for the palaver relay
//!
//! Both the daemon and the client build against these bodies and fixed
//! strings, so the HTTP surface cannot drift between the two.

pub mod error;
pub mod wire;

pub use error::*;
pub use wire::*;
