//! API key handling.
//!
//! Wraps the key in `secrecy` so it never shows up in logs or debug output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A Firecrawl API key that won't be logged or displayed.
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the key. Only call this when building the request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().trim().is_empty()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_in_debug() {
        let key = ApiKey::new("fc-super-secret");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("fc-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_and_clone() {
        let key = ApiKey::from("fc-123");
        let cloned = key.clone();
        assert_eq!(cloned.expose(), "fc-123");
        assert!(!cloned.is_empty());
        assert!(ApiKey::from("  ").is_empty());
    }
}
