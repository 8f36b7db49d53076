// SPDX-License-Identifier: Apache-2.0

use pmsafety_query::{QueryError, QueryErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    NotFound,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
            json!({"parameter": name, "value": value, "reason": "type coercion failed"}),
        )
    }

    #[must_use]
    pub fn not_found(message: &str) -> Self {
        Self::new(ApiErrorCode::NotFound, message, json!({}))
    }

    /// Response body: `detail` carries the human message, `error` the
    /// machine-readable form.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({"detail": self.message, "error": self})
    }
}

impl From<QueryError> for ApiError {
    fn from(value: QueryError) -> Self {
        let details = match &value.id {
            Some(id) => json!({"id": id}),
            None => json!({}),
        };
        match value.code {
            QueryErrorCode::NotFound => Self::new(ApiErrorCode::NotFound, value.message, details),
            _ => Self::new(ApiErrorCode::Internal, value.message, details),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}
impl std::error::Error for ApiError {}
