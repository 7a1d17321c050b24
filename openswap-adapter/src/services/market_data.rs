//! Request pipeline behind `/markets` and `/trades`

use std::sync::Arc;

use tracing::info;

use super::pagination::collect_swap_history;
use crate::config::SubgraphConfig;
use crate::core::{AdapterResult, SubgraphPort};
use crate::models::{map_markets, map_trades, Market, Trade};

/// Market-data service over a subgraph source
pub struct MarketDataService {
    source: Arc<dyn SubgraphPort>,
    pairs_limit: u32,
    max_trade_pages: u32,
}

impl MarketDataService {
    pub fn new(source: Arc<dyn SubgraphPort>, config: &SubgraphConfig) -> Self {
        Self {
            source,
            pairs_limit: config.pairs_limit,
            max_trade_pages: config.max_trade_pages,
        }
    }

    /// Trading pairs in upstream order, at most `pairs_limit` of them
    pub async fn markets(&self) -> AdapterResult<Vec<Market>> {
        let pairs = self.source.fetch_pairs(self.pairs_limit).await?;
        info!("Fetched {} pairs", pairs.len());
        Ok(map_markets(pairs))
    }

    /// Full trade history of `market` after the swap id `since`
    pub async fn trades(&self, market: &str, since: &str) -> AdapterResult<Vec<Trade>> {
        let swaps =
            collect_swap_history(self.source.as_ref(), market, since, self.max_trade_pages)
                .await?;
        info!("Fetched {} swaps for market {}", swaps.len(), market);
        Ok(map_trades(swaps)?)
    }
}
