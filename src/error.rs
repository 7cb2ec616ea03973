//! API Errors
//!
//! Failures of a single REST call. `Display` yields the text shown to the
//! user after the action prefix (e.g. "Error loading todos: ").

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },

    /// fetch() rejected or the browser refused to build the request
    #[error("{0}")]
    Network(String),

    /// 2xx response whose body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// Uses the `error` field of a JSON body when it is a non-empty string,
    /// else `HTTP Error <status>`. A non-string `error` (e.g. `42`) is not
    /// shown; it also falls back to the status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|v| v.as_str().map(str::to_owned))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("HTTP Error {}", status));
        ApiError::Status { status, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_is_used() {
        let err = ApiError::from_response(400, r#"{"error":"Todo text cannot be empty"}"#);
        assert_eq!(err.to_string(), "Todo text cannot be empty");
        assert!(matches!(err, ApiError::Status { status: 400, .. }));
    }

    #[test]
    fn test_falls_back_to_status() {
        assert_eq!(ApiError::from_response(500, "").to_string(), "HTTP Error 500");
        assert_eq!(ApiError::from_response(502, "<html>bad gateway</html>").to_string(), "HTTP Error 502");
        assert_eq!(ApiError::from_response(404, r#"{"message":"nope"}"#).to_string(), "HTTP Error 404");
    }

    #[test]
    fn test_empty_or_non_string_error_falls_back() {
        assert_eq!(ApiError::from_response(500, r#"{"error":""}"#).to_string(), "HTTP Error 500");
        assert_eq!(ApiError::from_response(500, r#"{"error":null}"#).to_string(), "HTTP Error 500");
        assert_eq!(ApiError::from_response(500, r#"{"error":42}"#).to_string(), "HTTP Error 500");
        assert_eq!(ApiError::from_response(500, "[1,2]").to_string(), "HTTP Error 500");
    }
}
