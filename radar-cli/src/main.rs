//! Radar CLI
//!
//! Command-line interface for triggering Radar test buckets from a CI
//! pipeline and failing the build when results are not as expected.

mod commands;
mod config;
mod report;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "radar")]
#[command(about = "Trigger Radar test buckets and wait for their results", long_about = None)]
struct Cli {
    /// Radar API URL
    #[arg(long, env = "RADAR_API_URL", default_value = radar_client::DEFAULT_BASE_URL)]
    api_url: String,

    /// Environment variable holding the API access token
    #[arg(long, default_value = radar_client::ACCESS_TOKEN_VAR)]
    token_var: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    request_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radar_cli=info,radar_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        access_token: radar_client::access_token_from_env(&cli.token_var),
        request_timeout: Duration::from_secs(cli.request_timeout),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
