//! Compliance Packet API client error types.
//!
//! Three failure families are surfaced to callers, all inspectable
//! without string-parsing:
//!
//! - [`ClientError::Validation`] — local, raised before any network call
//!   for empty/malformed input.
//! - [`ClientError::Api`] — the server rejected the request with a
//!   non-2xx status; carries the decoded error envelope.
//! - [`ClientError::Network`] — no response was received at all
//!   (connectivity, DNS, abrupt termination).

use crate::config::ConfigError;

/// Structured error decoded from a non-2xx response.
///
/// Constructed only by the response interpreter — never speculatively.
/// The server's error envelope evolved over time, so `code` and
/// `details` fall back to generated values when the body carries only
/// the legacy flat shape (see [`crate::interpret`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API error {status} {code}: {message}")]
pub struct ApiError {
    /// Machine-readable error code (e.g. `AUTH_INVALID_API_KEY`), or
    /// `HTTP_<status>` when the body did not carry one.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code of the response.
    pub status: u16,
    /// Additional context, present only when the structured envelope
    /// included it.
    pub details: Option<serde_json::Value>,
}

/// Errors from Compliance Packet API calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Caller input rejected before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// The server returned a non-2xx status with an error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport-level failure: no HTTP response was received.
    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response whose body could not be decoded into the
    /// expected shape (e.g. a registration response without an
    /// `apiKey` field).
    #[error("unexpected response from {endpoint}: {detail}")]
    UnexpectedResponse { endpoint: String, detail: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// The structured API error, if this is an [`ClientError::Api`].
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether this error was raised locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_status_code_and_message() {
        let err = ApiError {
            code: "AUTH_INVALID_API_KEY".to_string(),
            message: "Invalid API key.".to_string(),
            status: 403,
            details: None,
        };
        let rendered = format!("{err}");
        assert!(rendered.contains("403"));
        assert!(rendered.contains("AUTH_INVALID_API_KEY"));
        assert!(rendered.contains("Invalid API key."));
    }

    #[test]
    fn validation_display() {
        let err = ClientError::Validation("content must not be empty".to_string());
        assert!(format!("{err}").contains("content must not be empty"));
        assert!(err.is_validation());
    }

    #[test]
    fn as_api_error_returns_envelope() {
        let err = ClientError::Api(ApiError {
            code: "HTTP_500".to_string(),
            message: "Request failed with status 500".to_string(),
            status: 500,
            details: None,
        });
        let api = err.as_api_error().expect("api error");
        assert_eq!(api.status, 500);
        assert!(ClientError::Validation("x".into()).as_api_error().is_none());
    }
}
