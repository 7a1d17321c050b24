//! REST response shapes and the mapping from raw subgraph records

pub mod info;
pub mod market;
pub mod trade;

pub use info::{Capability, ExchangeInfo, OPENSWAP_INFO};
pub use market::{map_markets, Market, MarketKind};
pub use trade::{map_trades, OrderType, Side, Trade};
