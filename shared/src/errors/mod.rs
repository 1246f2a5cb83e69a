//! Error response contract shared with the HTTP layer
//!
//! Domain errors convert into `ErrorResponse` through `IntoErrorResponse`;
//! the HTTP layer serializes the response verbatim as the JSON error body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error codes shared between the server and its clients
pub mod error_codes {
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
}

/// JSON error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub error: String,

    /// Human-readable description
    pub message: String,

    /// Optional structured context (rejection reason, offending field, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// When the error was produced
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Builds a response carrying a code and message
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attaches one structured context entry
    ///
    /// Values that fail to serialize are dropped silently.
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.details
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), json_value);
        }
        self
    }
}

/// Conversion from domain errors into the outward error body
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

/// Result alias for handlers producing `ErrorResponse` failures
pub type ApiResult<T> = Result<T, ErrorResponse>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_from_json_when_absent() {
        let response = ErrorResponse::new(error_codes::INTERNAL_ERROR, "Token issuance failed");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "INTERNAL_ERROR");
        assert_eq!(json["message"], "Token issuance failed");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_add_detail_accumulates_entries() {
        let response = ErrorResponse::new(error_codes::TOKEN_INVALID, "Token rejected")
            .add_detail("reason", "expired")
            .add_detail("attempt", 3);

        let details = response.details.unwrap();
        assert_eq!(details["reason"], "expired");
        assert_eq!(details["attempt"], 3);
    }
}
