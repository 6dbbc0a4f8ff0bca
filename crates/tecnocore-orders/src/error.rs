//! # Error Types
//!
//! Storage errors for the order history.
//!
//! Load-time failures are a defined degraded path (the store starts empty
//! after logging them); save-time failures propagate to the caller, who may
//! treat them as non-fatal - the in-memory list stays correct either way.

use thiserror::Error;

/// Order storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be parsed or written.
    #[error("order document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The persisted document carries a schema version this build does not
    /// understand.
    #[error("unsupported order document schema version {found} (supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
