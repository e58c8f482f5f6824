//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gbot")]
#[command(about = "Telegram assistant bot: chat, image analysis, web search", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["gbot", "run", "--token", "abc"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("abc")),
        }
    }

    #[test]
    fn test_parse_run_without_token() {
        let cli = Cli::try_parse_from(["gbot", "run"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert!(token.is_none()),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["gbot"]).is_err());
    }
}
