//! REST API in the Nomics exchange-integration shape

mod handlers;
pub mod params;
pub mod responses;
mod routes;

pub use routes::*;

use crate::config::ServerConfig;
use crate::services::MarketDataService;
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Start the API server
pub async fn start_server(
    state: ApiState,
    config: &ServerConfig,
) -> Result<tokio::task::JoinHandle<()>> {
    let app = create_router(state, config);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("API server listening on {}", config.bind_address);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {}", e);
        }
    });

    Ok(handle)
}

/// Create the API application
pub fn create_router(state: ApiState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(create_nomics_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if config.enable_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Health check handler
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "service": "openswap-adapter"
    }))
}

/// Shared API state
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<MarketDataService>,
}

impl ApiState {
    pub fn new(service: Arc<MarketDataService>) -> Self {
        Self { service }
    }
}
