//! Raw subgraph records and GraphQL envelopes
//!
//! Field names follow the subgraph schema so a swap can be echoed back
//! verbatim in the `raw` field of a mapped trade.

use serde::{Deserialize, Serialize};

/// Trading pair as returned by `getPairs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPair {
    pub id: String,
    pub token0: RawToken,
    pub token1: RawToken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    pub symbol: String,
}

/// Swap as returned by `getSwaps`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSwap {
    pub id: String,
    #[serde(rename = "amountUSD")]
    pub amount_usd: String,
    pub timestamp: String,
    #[serde(rename = "amount0In")]
    pub amount0_in: String,
    #[serde(rename = "amount0Out")]
    pub amount0_out: String,
    #[serde(rename = "amount1In")]
    pub amount1_in: String,
    #[serde(rename = "amount1Out")]
    pub amount1_out: String,
    pub pair: RawSwapPair,
    pub transaction: RawTransaction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSwapPair {
    pub token0: RawPricedToken,
    pub token1: RawPricedToken,
}

/// Token with its most recent daily USD price (newest first, at most one)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPricedToken {
    pub symbol: String,
    #[serde(rename = "tokenDayData")]
    pub token_day_data: Vec<TokenDayData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDayData {
    #[serde(rename = "priceUSD")]
    pub price_usd: String,
    pub date: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub id: String,
}

/// `data` payload of `getPairs`
#[derive(Debug, Deserialize)]
pub struct PairsData {
    pub pairs: Vec<RawPair>,
}

/// `data` payload of `getSwaps`
#[derive(Debug, Deserialize)]
pub struct SwapsData {
    pub swaps: Vec<RawSwap>,
}

/// POST body of a GraphQL operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: V,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}
