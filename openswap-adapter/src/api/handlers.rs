//! API request handlers

use super::{params::TradesQuery, ApiState};
use crate::core::AdapterResult;
use crate::models::{ExchangeInfo, Market, Trade, OPENSWAP_INFO};
use axum::{
    extract::{Query, State},
    response::Json,
};

/// List trading pairs
pub async fn list_markets(State(state): State<ApiState>) -> AdapterResult<Json<Vec<Market>>> {
    let markets = state.service.markets().await?;
    Ok(Json(markets))
}

/// Full trade history for one market
pub async fn list_trades(
    State(state): State<ApiState>,
    Query(query): Query<TradesQuery>,
) -> AdapterResult<Json<Vec<Trade>>> {
    let params = query.into_params()?;
    let trades = state.service.trades(&params.market, &params.since).await?;
    Ok(Json(trades))
}

/// Exchange descriptor
pub async fn exchange_info() -> Json<ExchangeInfo> {
    Json(OPENSWAP_INFO)
}
