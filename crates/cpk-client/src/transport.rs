//! HTTP transport layer.
//!
//! One job: perform a request and hand back `(status, raw body text)`.
//! Non-2xx statuses are NOT errors here — the interpreter decides what
//! a status means. The only abnormal exits are transport failures
//! (DNS, connection refused, abrupt termination), which surface as
//! [`ClientError::Network`].
//!
//! No retries and no client-imposed timeout: the API gives `POST
//! /check` no idempotency key, so blind retries could double-score
//! content, and cancellation/timeout policy belongs to the caller.

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::ClientError;

/// The raw outcome of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body read as text, possibly empty or non-JSON.
    pub body: String,
}

/// Thin wrapper around a shared `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    /// Build a transport for the given base URL.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Network {
                endpoint: "client_init".to_string(),
                source: e,
            })?;
        Ok(Self { http, base_url })
    }

    /// Perform one request.
    ///
    /// - `Authorization: Bearer <key>` is set only when `api_key` is
    ///   supplied, so unauthenticated endpoints (registration) work
    ///   unchanged.
    /// - `body` is serialized as JSON with `Content-Type:
    ///   application/json` when present.
    /// - The status and raw body are always returned, whatever the
    ///   status was.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        api_key: Option<&str>,
        body: Option<&B>,
    ) -> Result<RawResponse, ClientError> {
        let endpoint = format!("{method} /{}", path.trim_start_matches('/'));
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));

        tracing::debug!(%endpoint, "sending compliance API request");

        let mut request = self.http.request(method, &url);
        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ClientError::Network {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ClientError::Network {
            endpoint,
            source: e,
        })?;

        Ok(RawResponse { status, body })
    }
}
