//! Error types for the oracle core.
//!
//! [`OracleError`] is what callers see. [`ProviderError`] stays inside the
//! acquisition boundary: the [`EntropyService`](crate::service::EntropyService)
//! logs it and moves on to the next provider.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors surfaced by selection, casting, and entropy acquisition.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The entropy buffer ran out before the selection completed.
    ///
    /// Recoverable: fetch a fresh, larger buffer and start over.
    #[error("insufficient entropy: needed more than {available} bytes (consumed {consumed})")]
    InsufficientEntropy {
        /// Bytes consumed when the buffer ran dry.
        consumed: usize,
        /// Bytes the selection was allowed to read.
        available: usize,
    },

    /// Every configured entropy provider failed or reported unhealthy.
    #[error("no entropy source available (tried: {})", attempted.join(", "))]
    EntropySourceUnavailable {
        /// Names of the providers that were tried, in order.
        attempted: Vec<String>,
    },

    /// A card or hexagram count outside the supported range.
    #[error("invalid {what} count {count} (expected 1..={max})")]
    InvalidCount {
        what: &'static str,
        count: usize,
        max: usize,
    },

    /// No spread with the given id.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// The hexagram table has no entry for a line pattern.
    #[error("hexagram table has no entry for line pattern {0:06b}")]
    MissingHexagram(u8),

    /// A King Wen number outside `1..=64`.
    #[error("no hexagram numbered {0}")]
    UnknownHexagramNumber(u8),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

impl OracleError {
    /// Whether a fresh attempt (new entropy, same request) may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientEntropy { .. } | Self::EntropySourceUnavailable { .. }
        )
    }

    /// Short message suitable for an end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InsufficientEntropy { .. } => {
                "Not enough entropy for this reading. Please try again.".to_string()
            }
            Self::EntropySourceUnavailable { .. } => {
                "Unable to obtain quantum entropy. Check your internet connection or camera, \
                 then try again later."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Failures inside a single entropy provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider} returned invalid data: {reason}")]
    InvalidResponse {
        provider: &'static str,
        reason: String,
    },

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
