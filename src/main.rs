//! Group Creator CLI - main entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use group_creator::commands;

#[derive(Parser)]
#[command(name = "group_creator")]
#[command(about = "Telegram Group Creator & Messenger", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create groups, invite members, and send filler messages (interactive)
    Create,

    /// Initialize a new session explicitly (the create command also logs in)
    InitSession,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("group_creator=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Create => commands::create::run().await?,
        Commands::InitSession => commands::init_session::run().await?,
    }

    Ok(())
}
