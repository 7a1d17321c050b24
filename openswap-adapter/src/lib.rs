//! OpenSwap Market-Data Adapter Library
//!
//! Queries the OpenSwap v2 subgraph and republishes its pairs and swaps
//! through the Nomics exchange-integration REST schema.

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod subgraph;

// Re-export commonly used types
pub use config::AdapterConfig;
pub use crate::core::{AdapterError, AdapterResult, SubgraphPort};
pub use services::MarketDataService;
pub use subgraph::SubgraphClient;
