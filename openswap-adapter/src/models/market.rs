//! Market (trading pair) REST shape

use serde::{Deserialize, Serialize};

use crate::subgraph::RawPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    Spot,
}

/// Entry of the `/markets` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MarketKind,
    pub base: String,
    pub quote: String,
}

impl From<RawPair> for Market {
    fn from(pair: RawPair) -> Self {
        Self {
            id: pair.id,
            kind: MarketKind::Spot,
            base: pair.token0.symbol,
            quote: pair.token1.symbol,
        }
    }
}

/// Map pairs to markets, keeping upstream order
pub fn map_markets(pairs: Vec<RawPair>) -> Vec<Market> {
    pairs.into_iter().map(Market::from).collect()
}
