//! Application services

pub mod market_data;
pub mod pagination;

pub use market_data::MarketDataService;
pub use pagination::collect_swap_history;
