//! Trade REST shape and the swap-to-trade mapping

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::core::MappingError;
use crate::subgraph::models::RawPricedToken;
use crate::subgraph::RawSwap;

/// Amount string the subgraph uses for an untouched swap leg
const ZERO_AMOUNT: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// Entry of the `/trades` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub timestamp: String,
    pub price: String,
    pub amount: String,
    pub amount_quote: String,
    pub order: String,
    #[serde(rename = "type")]
    pub kind: OrderType,
    pub side: Side,
    pub raw: RawSwap,
}

impl Trade {
    /// Reshape a raw swap. Pure: the same swap always yields the same trade.
    pub fn from_swap(swap: RawSwap) -> Result<Self, MappingError> {
        let timestamp = iso_timestamp(&swap)?;
        let base_price = latest_price_usd(&swap, &swap.pair.token0, "token0")?;
        let quote_price = latest_price_usd(&swap, &swap.pair.token1, "token1")?;

        let token0_in_is_zero = swap.amount0_in == ZERO_AMOUNT;
        let amount = if token0_in_is_zero {
            swap.amount1_in.clone()
        } else {
            swap.amount0_in.clone()
        };
        let amount_quote = if swap.amount0_out == ZERO_AMOUNT {
            swap.amount1_out.clone()
        } else {
            swap.amount0_out.clone()
        };
        let side = if token0_in_is_zero { Side::Buy } else { Side::Sell };

        Ok(Self {
            id: swap.id.clone(),
            timestamp,
            price: format_price(base_price / quote_price),
            amount,
            amount_quote,
            order: swap.transaction.id.clone(),
            kind: OrderType::Market,
            side,
            raw: swap,
        })
    }
}

/// Map swaps to trades; the first malformed swap fails the whole batch
pub fn map_trades(swaps: Vec<RawSwap>) -> Result<Vec<Trade>, MappingError> {
    swaps.into_iter().map(Trade::from_swap).collect()
}

fn latest_price_usd(
    swap: &RawSwap,
    token: &RawPricedToken,
    which: &'static str,
) -> Result<f64, MappingError> {
    let day = token
        .token_day_data
        .first()
        .ok_or_else(|| MappingError::MissingDayData {
            swap_id: swap.id.clone(),
            token: which,
        })?;

    day.price_usd
        .trim()
        .parse::<f64>()
        .map_err(|_| MappingError::InvalidNumber {
            swap_id: swap.id.clone(),
            field: "priceUSD",
            value: day.price_usd.clone(),
        })
}

/// Seconds-since-epoch string to `YYYY-MM-DDTHH:MM:SS.mmmZ`
fn iso_timestamp(swap: &RawSwap) -> Result<String, MappingError> {
    let seconds = swap
        .timestamp
        .trim()
        .parse::<i64>()
        .map_err(|_| MappingError::InvalidNumber {
            swap_id: swap.id.clone(),
            field: "timestamp",
            value: swap.timestamp.clone(),
        })?;

    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| MappingError::InvalidTimestamp {
            swap_id: swap.id.clone(),
            value: swap.timestamp.clone(),
        })
}

/// Shortest round-trip rendering of a price, `10.0 / 2.0` reads as `"5"`.
/// Magnitudes below `1e-6` or from `1e21` up use exponent form (`5e-9`,
/// `1e+25`), matching the published feed.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1e-6 || value.abs() >= 1e21 {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

/// `{:e}` with an explicit `+` on non-negative exponents
fn exponent_form(value: f64) -> String {
    let rendered = format!("{:e}", value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => rendered,
    }
}
