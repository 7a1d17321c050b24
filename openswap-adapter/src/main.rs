//! OpenSwap Market-Data Adapter
//!
//! Serves `/info`, `/markets` and `/trades` in the Nomics exchange-integration
//! shape from the OpenSwap v2 subgraph.

use anyhow::Result;
use clap::Parser;
use openswap_adapter::api::{self, ApiState};
use openswap_adapter::{AdapterConfig, MarketDataService, SubgraphClient};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "openswap-adapter")]
#[command(about = "Nomics-style REST adapter for the OpenSwap subgraph")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "adapter.toml")]
    config: String,

    /// Override the HTTP bind address
    #[arg(long)]
    bind_address: Option<String>,

    /// Override the subgraph endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Dry run mode (validate config and exit)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_found = std::path::Path::new(&cli.config).exists();
    let mut config = if config_found {
        AdapterConfig::from_file(&cli.config)?
    } else {
        AdapterConfig::default()
    };

    if let Some(bind_address) = cli.bind_address {
        config.server.bind_address = bind_address;
    }
    if let Some(endpoint) = cli.endpoint {
        config.subgraph.endpoint = endpoint;
    }
    if let Some(log_level) = cli.log_level {
        config.monitoring.log_level = log_level;
    }

    init_logging(&config);

    if !config_found {
        warn!("Config file not found, using defaults: {}", cli.config);
    }

    info!("Starting OpenSwap adapter");
    info!("Subgraph endpoint: {}", config.subgraph.endpoint);
    info!("Pairs limit: {}", config.subgraph.pairs_limit);
    info!("Max trade pages: {}", config.subgraph.max_trade_pages);

    config.check()?;
    info!("Configuration validated successfully");

    if cli.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        return Ok(());
    }

    let client = SubgraphClient::new(&config.subgraph)?;
    let service = Arc::new(MarketDataService::new(Arc::new(client), &config.subgraph));

    info!("Starting API server on {}", config.server.bind_address);
    let api_server = api::start_server(ApiState::new(service), &config.server).await?;

    info!("Adapter started successfully. Press Ctrl+C to shutdown.");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        _ = api_server => {
            info!("API server finished");
        }
    }

    info!("Shutting down OpenSwap adapter");
    Ok(())
}

fn init_logging(config: &AdapterConfig) {
    let log_level = config
        .monitoring
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("openswap_adapter={},tower_http={}", log_level, log_level).into()
    });

    if config.monitoring.structured_logging {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
