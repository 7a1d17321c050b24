//! Centralized error types for the adapter

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main adapter error type
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<Violation>),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
}

/// Failures talking to the subgraph
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Subgraph responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Subgraph returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Subgraph response carried no data")]
    MissingData,

    #[error("Malformed subgraph response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Swap history for {market} did not end within {pages} pages")]
    PageLimitExceeded { market: String, pages: u32 },
}

/// Raw records that cannot be reshaped into the REST schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("Swap {swap_id}: {token} has no day data")]
    MissingDayData { swap_id: String, token: &'static str },

    #[error("Swap {swap_id}: {field} is not a number ({value:?})")]
    InvalidNumber {
        swap_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Swap {swap_id}: timestamp {value:?} is out of range")]
    InvalidTimestamp { swap_id: String, value: String },
}

/// A single failed request-parameter rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("Field {} is missing", field);
        Self { field, message }
    }
}

/// Joins violation messages into the single `error` string of a 400 body
pub fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
