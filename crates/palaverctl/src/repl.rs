//! Interactive chat loop.
//!
//! Mirrors the flow of the original browser client: ask for the API key
//! once, then alternate user and assistant turns until EOF or /quit.

use crate::client::RelayClient;
use crate::session::Session;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Start the interactive chat.
pub async fn run(relay: RelayClient) -> Result<()> {
    let mut session = Session::new();

    println!();
    println!("{}", "Palaver - chat with Gemini".bold());
    println!("Type your message and press Enter. Use /quit to leave.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Key gate: nothing else is usable until the server accepts a key.
    while !session.credential_configured() {
        print!("{} ", "API key:".yellow());
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => return Ok(()), // EOF
        };

        match session.submit_credential(&relay, &input).await {
            Ok(true) => {
                println!("{}", "API key set successfully".green());
                println!();
            }
            Ok(false) => continue, // blank input, ask again
            Err(e) => {
                eprintln!("{} {e:#}", "Failed to set API key.".red());
                eprintln!("Please try again.");
            }
        }
    }

    loop {
        print!("{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
            None => break, // EOF
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "/quit" || trimmed == "/exit" {
            break;
        }

        session.set_pending_input(trimmed);

        let spinner = thinking_spinner();
        let reply = session.submit_message(&relay, trimmed).await;
        spinner.finish_and_clear();

        if let Some(turn) = reply {
            println!("{} {}", "gemini>".magenta().bold(), turn.text);
            println!();
        }
    }

    println!("Bye.");
    Ok(())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
