//! Typed query parameters, validated at the boundary

use serde::Deserialize;
use validator::Validate;

use crate::core::{AdapterError, AdapterResult, Violation};

/// Raw `/trades` query string
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TradesQuery {
    #[validate(required, length(min = 1))]
    pub market: Option<String>,
    pub since: Option<String>,
}

/// Validated `/trades` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradesParams {
    pub market: String,
    pub since: String,
}

impl TradesQuery {
    /// Check every rule and report all violations at once
    pub fn into_params(self) -> AdapterResult<TradesParams> {
        if let Err(errors) = self.validate() {
            let mut fields: Vec<&str> = errors.field_errors().into_keys().collect();
            fields.sort_unstable();
            return Err(AdapterError::Validation(
                fields.into_iter().map(Violation::missing).collect(),
            ));
        }

        Ok(TradesParams {
            market: self.market.unwrap_or_default(),
            since: self.since.unwrap_or_default(),
        })
    }
}
