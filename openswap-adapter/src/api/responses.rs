//! API response types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::core::{error::join_messages, AdapterError, Violation};

/// Body of a 400 response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub violations: Vec<Violation>,
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        match self {
            AdapterError::Validation(violations) => {
                let body = ErrorResponse {
                    error: join_messages(&violations),
                    violations,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            other => {
                tracing::error!("Request failed: {}", other);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
