//! Response interpretation: raw HTTP text + status → typed result.
//!
//! The transport hands every response over as `(status, raw_text)`;
//! this module decides what it means. A body that fails to parse as
//! JSON is not an error by itself — on a 2xx it is preserved verbatim
//! as [`Payload::Raw`], since some endpoints legitimately return empty
//! or non-JSON bodies.
//!
//! ## Error envelope tolerance
//!
//! The server's error shape evolved over time and there is no version
//! negotiation, so two incompatible shapes must both be accepted:
//!
//! - structured: `{"error": {"code", "message", "status", "details"}}`
//! - legacy flat: `{"error": "some message"}`
//!
//! plus a bare `{"message": "..."}` seen on some framework-generated
//! responses. [`ErrorEnvelope`] models this as one untagged parse step
//! rather than ad-hoc field probing.

use serde::Deserialize;

use crate::error::{ApiError, ClientError};

/// A successful response body: parsed JSON when the body was JSON,
/// otherwise the raw text verbatim.
///
/// An explicit sum type rather than a nullable sentinel, so downstream
/// handling stays exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// The body parsed as JSON (and, post-decode, into `T`).
    Json(T),
    /// The body was empty or not JSON; preserved verbatim.
    Raw(String),
}

impl<T> Payload<T> {
    /// The decoded value, if the body was JSON.
    pub fn json(&self) -> Option<&T> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Consume the payload, yielding the decoded value if present.
    pub fn into_json(self) -> Option<T> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// The raw text, if the body was not JSON.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Raw(text) => Some(text),
            Self::Json(_) => None,
        }
    }
}

impl Payload<serde_json::Value> {
    /// Decode the JSON arm into a concrete type; `Raw` passes through
    /// untouched.
    pub(crate) fn decode<T: serde::de::DeserializeOwned>(
        self,
        endpoint: &str,
    ) -> Result<Payload<T>, ClientError> {
        match self {
            Self::Json(value) => serde_json::from_value(value).map(Payload::Json).map_err(|e| {
                ClientError::UnexpectedResponse {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }),
            Self::Raw(text) => Ok(Payload::Raw(text)),
        }
    }
}

/// The two error-body generations plus the bare-message fallback,
/// tried in preference order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorEnvelope {
    /// Current structured shape: `{"error": {...}, "message"?}`.
    Structured {
        error: ErrorDetail,
        #[serde(default)]
        message: Option<String>,
    },
    /// Legacy flat shape: `{"error": "msg"}`.
    Legacy { error: String },
    /// Bare message with no `error` field at all.
    Bare { message: String },
}

/// Inner detail of the structured envelope. Every field is optional:
/// older structured responses omitted some of them.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

/// Classify a transport result into a success payload or an [`ApiError`].
///
/// Success range is 200–299. Outside it, an `ApiError` is built from
/// whichever envelope shape the body matches; a body that is not JSON
/// at all yields the generated `HTTP_<status>` fallback.
pub fn interpret(status: u16, raw_text: &str) -> Result<Payload<serde_json::Value>, ApiError> {
    let parsed: Option<serde_json::Value> = if raw_text.is_empty() {
        None
    } else {
        serde_json::from_str(raw_text).ok()
    };

    if (200..300).contains(&status) {
        return Ok(match parsed {
            Some(value) => Payload::Json(value),
            None => Payload::Raw(raw_text.to_string()),
        });
    }

    Err(match parsed {
        Some(value) => api_error_from_body(status, value),
        None => fallback_error(status),
    })
}

fn api_error_from_body(status: u16, body: serde_json::Value) -> ApiError {
    match serde_json::from_value::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope::Structured { error, message }) => ApiError {
            code: error.code.unwrap_or_else(|| generic_code(status)),
            message: error
                .message
                .or(message)
                .unwrap_or_else(|| fallback_message(status)),
            status: error.status.unwrap_or(status),
            details: error.details,
        },
        Ok(ErrorEnvelope::Legacy { error }) => ApiError {
            code: generic_code(status),
            message: error,
            status,
            details: None,
        },
        Ok(ErrorEnvelope::Bare { message }) => ApiError {
            code: generic_code(status),
            message,
            status,
            details: None,
        },
        // JSON, but no recognizable error fields.
        Err(_) => fallback_error(status),
    }
}

fn fallback_error(status: u16) -> ApiError {
    ApiError {
        code: generic_code(status),
        message: fallback_message(status),
        status,
        details: None,
    }
}

fn generic_code(status: u16) -> String {
    format!("HTTP_{status}")
}

fn fallback_message(status: u16) -> String {
    format!("Request failed with status {status}")
}
