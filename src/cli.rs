use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::DEFAULT_BIND_ADDRESS;
use commands::{serve, show_config};

#[derive(Parser)]
#[command(name = "budg")]
#[command(about = "Budg budgeting API server and tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Settings are read from the environment and an optional `.env` file.
    /// SECRET_KEY, DATABASE_URL, REDIS_URL and REDIS_PASSWORD are required.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,
    },
    /// Print the effective settings as YAML with secrets redacted
    Config,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Config => {
                show_config()?;
            }
        }
        Ok(())
    }
}
