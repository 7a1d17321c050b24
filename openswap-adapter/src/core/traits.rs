//! Core trait abstractions

use async_trait::async_trait;

use super::error::UpstreamError;
use crate::subgraph::models::{RawPair, RawSwap};

/// Subgraph port - abstraction over the upstream GraphQL source
#[async_trait]
pub trait SubgraphPort: Send + Sync {
    /// Fetch the first `limit` trading pairs, in upstream order
    async fn fetch_pairs(&self, limit: u32) -> Result<Vec<RawPair>, UpstreamError>;

    /// Fetch one page of swaps for `market` with ids greater than `since`,
    /// ordered by timestamp and offset by `skip`
    async fn fetch_trades_page(
        &self,
        market: &str,
        since: &str,
        skip: u32,
    ) -> Result<Vec<RawSwap>, UpstreamError>;
}
