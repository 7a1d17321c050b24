//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use openswap_adapter::core::{SubgraphPort, UpstreamError};
use openswap_adapter::subgraph::{RawPair, RawSwap};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Swap record as the subgraph serializes it
pub fn swap_json(id: &str, amount0_in: &str, amount1_in: &str) -> Value {
    let buy = amount0_in == "0";
    json!({
        "id": id,
        "amountUSD": "42.1",
        "timestamp": "1622548800",
        "amount0In": amount0_in,
        "amount0Out": if buy { "9" } else { "0" },
        "amount1In": amount1_in,
        "amount1Out": if buy { "0" } else { "4" },
        "pair": {
            "token0": {
                "symbol": "OSWAP",
                "tokenDayData": [{ "priceUSD": "10.0", "date": 1622505600 }]
            },
            "token1": {
                "symbol": "WONE",
                "tokenDayData": [{ "priceUSD": "2.0", "date": 1622505600 }]
            }
        },
        "transaction": { "id": format!("{}-tx", id) }
    })
}

pub fn swap(id: &str, amount0_in: &str, amount1_in: &str) -> RawSwap {
    serde_json::from_value(swap_json(id, amount0_in, amount1_in)).unwrap()
}

pub fn pair_json(id: &str, base: &str, quote: &str) -> Value {
    json!({
        "id": id,
        "token0": { "symbol": base },
        "token1": { "symbol": quote }
    })
}

pub fn pair(id: &str, base: &str, quote: &str) -> RawPair {
    serde_json::from_value(pair_json(id, base, quote)).unwrap()
}

/// Arguments of one `fetch_trades_page` call
#[derive(Debug, Clone, PartialEq)]
pub struct PageCall {
    pub market: String,
    pub since: String,
    pub skip: u32,
}

/// Scripted subgraph: serves queued pages, then empty pages
#[derive(Default)]
pub struct ScriptedSubgraph {
    pub pairs: Vec<RawPair>,
    pub pages: Mutex<VecDeque<Result<Vec<RawSwap>, String>>>,
    pub pair_limits: Mutex<Vec<u32>>,
    pub page_calls: Mutex<Vec<PageCall>>,
    pub fail_pairs: bool,
}

impl ScriptedSubgraph {
    pub fn with_pairs(pairs: Vec<RawPair>) -> Self {
        Self {
            pairs,
            ..Self::default()
        }
    }

    pub fn with_pages(pages: Vec<Vec<RawSwap>>) -> Self {
        Self {
            pages: Mutex::new(pages.into_iter().map(Ok).collect()),
            ..Self::default()
        }
    }

    /// Page `n` of `count` synthetic sell swaps
    pub fn sized_page(page: usize, count: usize) -> Vec<RawSwap> {
        (0..count)
            .map(|i| swap(&format!("0xswap-{}-{}", page, i), "1", "0"))
            .collect()
    }

    pub fn page_calls(&self) -> Vec<PageCall> {
        self.page_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubgraphPort for ScriptedSubgraph {
    async fn fetch_pairs(&self, limit: u32) -> Result<Vec<RawPair>, UpstreamError> {
        self.pair_limits.lock().unwrap().push(limit);
        if self.fail_pairs {
            return Err(UpstreamError::MissingData);
        }
        Ok(self.pairs.iter().take(limit as usize).cloned().collect())
    }

    async fn fetch_trades_page(
        &self,
        market: &str,
        since: &str,
        skip: u32,
    ) -> Result<Vec<RawSwap>, UpstreamError> {
        self.page_calls.lock().unwrap().push(PageCall {
            market: market.to_string(),
            since: since.to_string(),
            skip,
        });
        match self.pages.lock().unwrap().pop_front() {
            Some(Ok(page)) => Ok(page),
            Some(Err(message)) => Err(UpstreamError::GraphQl(vec![message])),
            None => Ok(Vec::new()),
        }
    }
}
