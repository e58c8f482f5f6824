//! gbot: runs the Telegram bot. Config from env (and `.env`) plus optional CLI args.

use anyhow::Result;
use clap::Parser;
use gbot_cli::{run_bot, AppConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = AppConfig::load(token)?;
            run_bot(config).await
        }
    }
}
