//! HTTP GraphQL client for the OpenSwap subgraph

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::models::{GraphQlRequest, GraphQlResponse, PairsData, RawPair, RawSwap, SwapsData};
use super::queries::{
    PairsVariables, SwapsVariables, PAIRS_OPERATION, PAIRS_QUERY, SWAPS_OPERATION, SWAPS_QUERY,
};
use crate::config::SubgraphConfig;
use crate::core::{SubgraphPort, UpstreamError};

/// Subgraph client over a shared `reqwest` connection pool
#[derive(Clone)]
pub struct SubgraphClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SubgraphClient {
    pub fn new(config: &SubgraphConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("openswap-adapter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
        })
    }

    /// Run a named operation and return its `data` payload
    async fn execute<V, T>(
        &self,
        operation_name: &str,
        query: &str,
        variables: V,
    ) -> Result<T, UpstreamError>
    where
        V: Serialize + std::fmt::Debug,
        T: DeserializeOwned,
    {
        debug!("GraphQL call: {} with variables: {:?}", operation_name, variables);

        let body = GraphQlRequest {
            query,
            operation_name,
            variables,
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_str(&text)?;
        if !envelope.errors.is_empty() {
            return Err(UpstreamError::GraphQl(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        envelope.data.ok_or(UpstreamError::MissingData)
    }
}

#[async_trait]
impl SubgraphPort for SubgraphClient {
    async fn fetch_pairs(&self, limit: u32) -> Result<Vec<RawPair>, UpstreamError> {
        let data: PairsData = self
            .execute(PAIRS_OPERATION, PAIRS_QUERY, PairsVariables { limit })
            .await?;
        Ok(data.pairs)
    }

    async fn fetch_trades_page(
        &self,
        market: &str,
        since: &str,
        skip: u32,
    ) -> Result<Vec<RawSwap>, UpstreamError> {
        let variables = SwapsVariables {
            market,
            skip,
            since,
        };
        let data: SwapsData = self
            .execute(SWAPS_OPERATION, SWAPS_QUERY, variables)
            .await?;
        Ok(data.swaps)
    }
}
