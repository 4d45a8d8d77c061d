use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use crate::application::ExpenseService;
use crate::bot::{self, handle_text};
use crate::config::{BotConfig, DEFAULT_ENV_FILE};
use crate::domain::UserId;
use crate::logging::init_tracing;
use crate::storage::Ledger;

/// Rashod - expense tracking chat bot
#[derive(Parser)]
#[command(name = "rashod")]
#[command(about = "A Telegram bot that records expenses and reports USD totals")]
#[command(version)]
pub struct Cli {
    /// Env file to read BOT_TOKEN from
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Telegram bot (long polling)
    Run {
        /// Bot token (overrides BOT_TOKEN and the env file)
        #[arg(long)]
        token: Option<String>,
    },

    /// Type bot commands on stdin and print the replies
    Console {
        /// User id the commands are recorded under
        #[arg(short, long, default_value = "1")]
        user: UserId,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        // The ledger lives exactly as long as this command
        let service = Arc::new(ExpenseService::new(Ledger::new()));

        match self.command {
            Commands::Run { token } => {
                let config = BotConfig::load(&self.env_file, token)
                    .context("Failed to load bot configuration")?;
                info!(env_file = %self.env_file.display(), "configuration loaded");
                bot::run(config.token, service)
                    .await
                    .context("Telegram bot failed")?;
            }

            Commands::Console { user } => {
                let stdin = BufReader::new(tokio::io::stdin());
                let mut stdout = tokio::io::stdout();
                run_console(&service, user, stdin, &mut stdout).await?;
            }
        }

        Ok(())
    }
}

/// Feed each input line to the command handler and write the replies.
pub async fn run_console<R, W>(
    service: &ExpenseService,
    user: UserId,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        if let Some(reply) = handle_text(service, user, &line, None, Utc::now()).await {
            output
                .write_all(format!("{}\n\n", reply).as_bytes())
                .await
                .context("Failed to write reply")?;
        }
    }
    output.flush().await.context("Failed to flush output")?;
    Ok(())
}
