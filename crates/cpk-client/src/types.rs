//! Shared identifier types.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// An opaque bearer credential issued by `POST /register`.
///
/// Keys have the format `cpk_<random>`; the client treats them as
/// opaque and never inspects or mutates them. The inner string is
/// zeroized on drop and `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key string returned by the server.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for constructing the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_exposes_raw_key() {
        let key = ApiKey::new("cpk_abc123");
        assert_eq!(key.as_str(), "cpk_abc123");
        assert_eq!(key.as_ref(), "cpk_abc123");
    }

    #[test]
    fn debug_redacts_key_material() {
        let key = ApiKey::new("cpk_abc123");
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("cpk_abc123"));
        assert!(rendered.contains("REDACTED"));
    }
}
