//! # Error Types
//!
//! Errors for the rate provider.
//!
//! `SourceError` never escapes the provider: a failing source is logged,
//! excluded from aggregation and replaced by fallback data if it was the
//! last one standing. `RatesError` covers provider setup and control.

use thiserror::Error;

// =============================================================================
// Source Error
// =============================================================================

/// A single price source failed. Isolated per source; never fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Request never completed (connect failure, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The body was not the expected JSON document.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document parsed but carried no rate for the requested currency.
    #[error("no {currency} rate in response")]
    MissingRate { currency: String },
}

// =============================================================================
// Rates Error
// =============================================================================

/// Provider setup and control errors.
#[derive(Debug, Error)]
pub enum RatesError {
    /// Configuration failed validation.
    #[error("invalid rates configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed.
    #[error("failed to parse rates configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The provider task has already shut down.
    #[error("rate provider is no longer running")]
    ProviderStopped,
}

/// Convenience type alias for Results with RatesError.
pub type RatesResult<T> = Result<T, RatesError>;
