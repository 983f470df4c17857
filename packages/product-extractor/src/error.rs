//! Typed errors for product extraction.
//!
//! Every failure path converges on [`ExtractionError`]. The [`FailureKind`]
//! it carries is for diagnostics only; callers are not expected to branch
//! on it.

use std::fmt;
use thiserror::Error;

/// Why an extraction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The provider exposes no compatible extraction method.
    CapabilityUnavailable,

    /// The provider answered but reported an error (bad target, rate limit).
    ProviderError,

    /// The call itself failed (network, timeout, decode fault).
    TransportException,

    /// The call succeeded but no product name could be reconciled.
    EmptyExtraction,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CapabilityUnavailable => "capability_unavailable",
            Self::ProviderError => "provider_error",
            Self::TransportException => "transport_exception",
            Self::EmptyExtraction => "empty_extraction",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single externally visible extraction failure.
#[derive(Debug, Clone, Error)]
#[error("Failed to scrape product: {message}")]
pub struct ExtractionError {
    kind: FailureKind,
    message: String,
}

impl ExtractionError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn capability_unavailable() -> Self {
        Self::new(
            FailureKind::CapabilityUnavailable,
            "no extraction capability available",
        )
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ProviderError, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(FailureKind::TransportException, message)
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(FailureKind::EmptyExtraction, message)
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The underlying cause, without the "Failed to scrape product" prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors loading provider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}
