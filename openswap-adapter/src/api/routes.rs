//! API route definitions

use super::{handlers::*, ApiState};
use axum::{routing::get, Router};

/// Create the Nomics exchange-integration routes
pub fn create_nomics_routes() -> Router<ApiState> {
    Router::new()
        .route("/info", get(exchange_info))
        .route("/markets", get(list_markets))
        .route("/trades", get(list_trades))
}
