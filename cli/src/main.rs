//! Terminal client for reading and ratifying the charter.

mod app;
mod config;
mod steps;

use clap::Parser;
use std::path::PathBuf;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "ratify", about = "Read the charter and ratify it with your wallet")]
struct Cli {
    /// Wallet provider RPC endpoint. Without one, the ratify flow reports
    /// the missing wallet capability.
    #[arg(long, env = "RATIFY_PROVIDER_URL")]
    provider_url: Option<String>,

    /// Approvals endpoint the signed submission is posted to.
    #[arg(long, env = "RATIFY_SUBMIT_ENDPOINT")]
    endpoint: Option<String>,

    /// Content gateway base URL the charter is fetched from.
    #[arg(long, env = "RATIFY_GATEWAY")]
    gateway: Option<String>,

    /// Content hash of the charter version to display and ratify.
    #[arg(long, env = "RATIFY_CHARTER_HASH")]
    charter_hash: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "RATIFY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the four-step wallet ratification flow.
    Ratify,
    /// Fetch and print the charter document.
    Charter,
    /// Show the charter and forward to the external voting platform.
    Snapshot,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match AppConfig::from_toml_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e:#}, using defaults");
                AppConfig::default()
            }
        },
        None => AppConfig::default(),
    };

    if cli.provider_url.is_some() {
        config.provider_url = cli.provider_url;
    }
    if let Some(endpoint) = cli.endpoint {
        config.submit_endpoint = endpoint;
    }
    if let Some(gateway) = cli.gateway {
        config.gateway = gateway;
    }
    if let Some(hash) = cli.charter_hash {
        config.charter_hash = hash;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    ratify_utils::init_tracing(&config.log_level);
    tracing::debug!(gateway = %config.gateway, endpoint = %config.submit_endpoint, "starting");

    match cli.command {
        Command::Ratify => app::run_ratify(&config).await,
        Command::Charter => app::run_charter(&config).await,
        Command::Snapshot => app::run_snapshot(&config).await,
    }
}
