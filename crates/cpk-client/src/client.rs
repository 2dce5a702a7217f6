//! The public Compliance Packet API client.
//!
//! Stateless aside from configuration: every call performs exactly one
//! HTTP request and holds no mutable shared state, so a single client
//! can be shared freely across tasks and calls may run concurrently
//! with no ordering guarantees between them.

use reqwest::Method;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::interpret::{interpret, Payload};
use crate::packet::CompliancePacket;
use crate::transport::Transport;
use crate::types::ApiKey;
use crate::usage::UsageReport;

/// Successful `POST /register` response body.
#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(rename = "apiKey")]
    api_key: String,
}

/// Typed client for the Compliance Packet API.
#[derive(Debug, Clone)]
pub struct ComplianceClient {
    transport: Transport,
    default_key: Option<String>,
}

impl ComplianceClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: Transport::new(config.base_url)?,
            default_key: config.api_key,
        })
    }

    /// Register an email address and obtain a fresh API key.
    ///
    /// Calls `POST /register` with no auth header. The email must
    /// contain `@` — a cheap local pre-check, not a substitute for
    /// server-side validation. An omitted or blank label defaults to
    /// `"default"`.
    pub async fn register(
        &self,
        email: &str,
        label: Option<&str>,
    ) -> Result<ApiKey, ClientError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ClientError::Validation(
                "a valid email address is required".to_string(),
            ));
        }
        let label = label.map(str::trim).filter(|l| !l.is_empty()).unwrap_or("default");

        let body = serde_json::json!({ "email": email, "label": label });
        let raw = self
            .transport
            .send(Method::POST, "register", None, Some(&body))
            .await?;
        let payload = self.interpret_logged("POST /register", raw.status, &raw.body)?;

        match payload.decode::<RegisterResponse>("POST /register")? {
            Payload::Json(response) => Ok(ApiKey::new(response.api_key)),
            // Registration is useless without a key; a non-JSON 2xx
            // body here is a broken deployment, not a tolerable quirk.
            Payload::Raw(text) => Err(ClientError::UnexpectedResponse {
                endpoint: "POST /register".to_string(),
                detail: format!("expected an apiKey payload, got non-JSON body: {text:?}"),
            }),
        }
    }

    /// Score a piece of content with the configured default API key.
    ///
    /// Fails with a validation error when the client was built without
    /// a default key.
    pub async fn check(&self, content: &str) -> Result<Payload<CompliancePacket>, ClientError> {
        let key = self.default_key()?.to_string();
        self.check_with_key(content, &key).await
    }

    /// Score a piece of content with an explicit API key.
    ///
    /// Calls `POST /check`. Content must be non-empty after trimming
    /// and the key must be non-empty; both are checked before any
    /// network call. The content is sent exactly as given — trimming
    /// is only the emptiness pre-check.
    ///
    /// On a 2xx the parsed [`CompliancePacket`] comes back as
    /// [`Payload::Json`]; a legitimate non-JSON 2xx body is preserved
    /// as [`Payload::Raw`] rather than treated as an error.
    pub async fn check_with_key(
        &self,
        content: &str,
        api_key: &str,
    ) -> Result<Payload<CompliancePacket>, ClientError> {
        if content.trim().is_empty() {
            return Err(ClientError::Validation(
                "content must not be empty".to_string(),
            ));
        }
        let api_key = require_key(api_key)?;

        let body = serde_json::json!({ "content": content });
        let raw = self
            .transport
            .send(Method::POST, "check", Some(api_key), Some(&body))
            .await?;
        let payload = self.interpret_logged("POST /check", raw.status, &raw.body)?;
        payload.decode("POST /check")
    }

    /// Fetch usage statistics with the configured default API key.
    pub async fn usage(&self) -> Result<Payload<UsageReport>, ClientError> {
        let key = self.default_key()?.to_string();
        self.usage_with_key(&key).await
    }

    /// Fetch usage statistics for an explicit API key.
    ///
    /// Calls `GET /usage` with no request body.
    pub async fn usage_with_key(
        &self,
        api_key: &str,
    ) -> Result<Payload<UsageReport>, ClientError> {
        let api_key = require_key(api_key)?;

        let raw = self
            .transport
            .send(
                Method::GET,
                "usage",
                Some(api_key),
                None::<&serde_json::Value>,
            )
            .await?;
        let payload = self.interpret_logged("GET /usage", raw.status, &raw.body)?;
        payload.decode("GET /usage")
    }

    fn default_key(&self) -> Result<&str, ClientError> {
        self.default_key.as_deref().ok_or_else(|| {
            ClientError::Validation(
                "no default API key configured; use the *_with_key variant".to_string(),
            )
        })
    }

    fn interpret_logged(
        &self,
        endpoint: &str,
        status: u16,
        body: &str,
    ) -> Result<Payload<serde_json::Value>, ClientError> {
        match interpret(status, body) {
            Ok(payload) => Ok(payload),
            Err(err) => {
                tracing::warn!(
                    endpoint,
                    status = err.status,
                    code = %err.code,
                    "compliance API returned an error"
                );
                Err(ClientError::Api(err))
            }
        }
    }
}

fn require_key(api_key: &str) -> Result<&str, ClientError> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(ClientError::Validation(
            "an API key is required".to_string(),
        ));
    }
    Ok(api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ComplianceClient {
        ComplianceClient::new(ClientConfig::default()).expect("client")
    }

    #[tokio::test]
    async fn register_rejects_empty_email_locally() {
        let err = client().register("", None).await.expect_err("validation");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn register_rejects_email_without_at_sign() {
        let err = client()
            .register("not-an-email", Some("t"))
            .await
            .expect_err("validation");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn check_rejects_blank_content_locally() {
        let err = client()
            .check_with_key("   ", "cpk_abc")
            .await
            .expect_err("validation");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn check_rejects_empty_key_locally() {
        let err = client()
            .check_with_key("hello", "")
            .await
            .expect_err("validation");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn usage_rejects_empty_key_locally() {
        let err = client().usage_with_key("").await.expect_err("validation");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn default_key_variants_require_configured_key() {
        let err = client().check("hello").await.expect_err("validation");
        assert!(err.is_validation());
        let err = client().usage().await.expect_err("validation");
        assert!(err.is_validation());
    }
}
