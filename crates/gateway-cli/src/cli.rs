//! CLI argument definitions using clap.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Chat Gateway - a minimal relay between chat clients and Gemini
#[derive(Parser, Debug)]
#[command(name = "chat-gateway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Gateway server URL
    #[arg(short = 'u', long, env = "GATEWAY_URL", default_value = "http://localhost:3000", global = true)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the gateway server
    #[command(visible_alias = "run")]
    Start(commands::start::StartArgs),

    /// Check gateway health
    Health(commands::health::HealthArgs),

    /// Send a chat message
    Chat(commands::chat::ChatArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Start(args) => commands::start::execute(args).await,
            Commands::Health(args) => commands::health::execute(args, &self.url, self.json).await,
            Commands::Chat(args) => commands::chat::execute(args, &self.url, self.json).await,
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
