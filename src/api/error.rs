//! Transport error type.
//!
//! Every failed call against the catalog API collapses into a single
//! [`RequestError`] carrying a user-facing message. The HTTP status is kept
//! alongside so callers can tell a missing record apart from a broken server.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Message used when an error body is not valid JSON.
pub const UNPARSABLE_BODY_MESSAGE: &str = "An error occurred";

/// Message used when an error body parses but carries no message.
pub const MISSING_MESSAGE: &str = "Request failed";

/// Failure of a single API request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    message: String,
    status: Option<StatusCode>,
}

impl RequestError {
    pub fn new(message: impl Into<String>, status: Option<StatusCode>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Connection-level failure: no response was received.
    pub fn transport(source: &reqwest::Error) -> Self {
        tracing::debug!(error = %source, "transport failure");
        Self::new(UNPARSABLE_BODY_MESSAGE, None)
    }

    /// Non-2xx response. The message is pulled out of the body when possible.
    pub fn from_error_body(status: StatusCode, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => parsed
                .message
                .or(parsed.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| MISSING_MESSAGE.to_string()),
            Err(_) => UNPARSABLE_BODY_MESSAGE.to_string(),
        };
        Self::new(message, Some(status))
    }

    /// Successful response whose body did not match the expected schema.
    pub fn invalid_body(source: &serde_json::Error) -> Self {
        Self::new(format!("invalid response body: {source}"), None)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}
