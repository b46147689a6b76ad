//! CLI administration tool for shorturl.
//!
//! Runs the same validation the service applies, and checks configuration,
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Check whether a URL would be accepted
//! cargo run --bin shorturl-admin -- check https://www.freecodecamp.com
//!
//! # Load and validate configuration from the environment
//! cargo run --bin shorturl-admin -- config
//! ```

use shorturl::application::services::UrlValidator;
use shorturl::config::{self, Config};
use shorturl::infrastructure::dns::SystemResolver;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for operating shorturl.
#[derive(Parser)]
#[command(name = "shorturl-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Check whether a URL would be accepted for shortening
    Check {
        /// Candidate URL
        url: String,

        /// Hostname lookup timeout in milliseconds (defaults to RESOLVE_TIMEOUT_MS)
        #[arg(short, long)]
        timeout_ms: Option<u64>,
    },

    /// Load and validate configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { url, timeout_ms } => check_url(&url, timeout_ms).await,
        Commands::Config => check_config(),
    }
}

/// Validates a single URL against the system resolver.
///
/// Prints the internal rejection reason, which the HTTP API never exposes.
async fn check_url(url: &str, timeout_ms: Option<u64>) -> Result<ExitCode> {
    let timeout = match timeout_ms {
        Some(ms) => Duration::from_millis(ms),
        None => Config::from_env()?.resolve_timeout(),
    };

    let validator = UrlValidator::new(Arc::new(SystemResolver::new()), timeout);

    match validator.validate(url).await {
        Ok(valid) => {
            println!("{} {}", "✓ accepted".green().bold(), valid);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "✗ rejected".red().bold(), url);
            println!("  {} {}", "reason:".dimmed(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Loads configuration and prints it, or the first validation error.
fn check_config() -> Result<ExitCode> {
    match config::load_from_env() {
        Ok(config) => {
            println!("{}", "Configuration OK".green().bold());
            for (label, value) in config.summary_lines() {
                println!("  {:<18} {}", format!("{label}:").bold(), value);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {:#}", "Configuration error:".red().bold(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}
