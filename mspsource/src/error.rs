//! Errors raised by provider adapters.

use thiserror::Error;

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// How the queue controller must react to a failed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Temporary network or provider failure. The record is skipped.
    Transient,
    /// The record cannot be resolved anymore. The record is skipped.
    Invalid,
    /// Credentials lost or adapter broken. Reported to the caller.
    Fatal,
}

/// Errors raised by a provider adapter call
#[derive(Error, Debug)]
pub enum SourceError {
    /// Credentials or tokens rejected by the provider
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The operation needs a higher service tier
    #[error("Subscription level insufficient: {0}")]
    SubscriptionRequired(String),

    /// Temporary network or provider-side failure
    #[error("Temporary provider failure: {0}")]
    Transient(String),

    /// The record is no longer resolvable
    #[error("Record no longer available: {0}")]
    Invalid(String),

    /// A provider call ran past its deadline
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The adapter does not serve this kind of request
    #[error("Not supported by this provider: {0}")]
    Unsupported(String),

    /// Anything else the adapter could not recover from
    #[error("Provider error: {0}")]
    Other(String),
}

impl SourceError {
    /// Maps an HTTP status code returned by a provider onto an error kind.
    pub fn from_status_code(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            401 => Self::AuthenticationFailed(message),
            402 | 403 => Self::SubscriptionRequired(message),
            404 | 410 => Self::Invalid(message),
            408 | 429 | 500..=599 => Self::Transient(format!("HTTP {code}: {message}")),
            _ => Self::Invalid(format!("HTTP {code}: {message}")),
        }
    }

    pub fn transient(msg: impl Into<String>) -> Self {
        Self::Transient(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn class(&self) -> FailureClass {
        match self {
            SourceError::Transient(_) | SourceError::Timeout(_) => FailureClass::Transient,
            SourceError::Invalid(_) => FailureClass::Invalid,
            SourceError::AuthenticationFailed(_)
            | SourceError::SubscriptionRequired(_)
            | SourceError::Unsupported(_)
            | SourceError::Other(_) => FailureClass::Fatal,
        }
    }

    /// True when the controller drops the record and moves on.
    pub fn is_skippable(&self) -> bool {
        self.class() != FailureClass::Fatal
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, SourceError::AuthenticationFailed(_))
    }

    pub fn is_subscription_error(&self) -> bool {
        matches!(self, SourceError::SubscriptionRequired(_))
    }
}
