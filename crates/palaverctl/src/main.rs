//! Palaver Control - terminal chat client for the palaver relay daemon.

use anyhow::Result;
use clap::Parser;
use palaverctl::cli::{Cli, Commands};
use palaverctl::client::RelayClient;
use palaverctl::repl;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let relay = RelayClient::from_flag(cli.server);

    match cli.command {
        Some(Commands::SetKey { api_key }) => {
            let api_key = api_key.trim();
            if api_key.is_empty() {
                anyhow::bail!("API key is empty");
            }
            let message = relay.set_key(api_key).await?;
            println!("{message}");
            Ok(())
        }
        Some(Commands::Send { message }) => {
            let message = message.trim();
            if message.is_empty() {
                anyhow::bail!("Message is empty");
            }
            let reply = relay.chat(message).await?;
            println!("{reply}");
            Ok(())
        }
        None => repl::run(relay).await,
    }
}
