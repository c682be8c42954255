//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use clap::{Parser, Subcommand};

/// Palaver chat client
#[derive(Parser)]
#[command(name = "palaverctl")]
#[command(about = "Palaver - chat with Gemini through the relay daemon", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Relay server URL (overrides $PALAVER_SERVER and the default)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Subcommand (if not provided, starts the interactive chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Configure the API key on the relay daemon
    SetKey {
        /// API key for the generation service
        api_key: String,
    },

    /// Send a single message and print the reply
    Send {
        /// Message text
        message: String,
    },
}
