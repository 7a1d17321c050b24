//! Upstream query client for the OpenSwap v2 subgraph

pub mod client;
pub mod models;
pub mod queries;

pub use client::SubgraphClient;
pub use models::{RawPair, RawSwap};
pub use queries::SWAPS_PAGE_SIZE;
