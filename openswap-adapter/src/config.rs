//! Configuration management for the adapter

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use validator::{Validate, ValidationError};

pub const DEFAULT_SUBGRAPH_ENDPOINT: &str =
    "https://api.openswap.one/subgraphs/name/openswap/openswapv2";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AdapterConfig {
    #[validate]
    pub server: ServerConfig,
    #[validate]
    pub subgraph: SubgraphConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(custom = "validate_bind_address")]
    pub bind_address: String,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubgraphConfig {
    #[validate(url)]
    pub endpoint: String,
    /// `first` argument of `getPairs`
    #[validate(range(min = 1, max = 1000))]
    pub pairs_limit: u32,
    /// Upper bound on `getSwaps` requests per `/trades` call
    #[validate(range(min = 1, max = 100000))]
    pub max_trade_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub structured_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3500".to_string(),
            enable_cors: true,
        }
    }
}

impl Default for SubgraphConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUBGRAPH_ENDPOINT.to_string(),
            pairs_limit: 60,
            max_trade_pages: 500,
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            structured_logging: false,
        }
    }
}

fn validate_bind_address(address: &str) -> Result<(), ValidationError> {
    address
        .parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("bind_address"))
}

impl AdapterConfig {
    /// Load configuration from file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Run the field rules; call again after applying CLI overrides
    pub fn check(&self) -> Result<()> {
        Validate::validate(self).context("Invalid configuration")?;
        Ok(())
    }
}
