//! # Error Types
//!
//! Domain-specific error types for tecnocore-core.
//!
//! Cart operations are deliberately infallible (absent ids are no-ops), so
//! the surface here is small: business rule violations and field validation
//! failures. Storage and workflow errors live in their owning crates and
//! wrap these where needed.

use thiserror::Error;

use crate::types::{Currency, PaymentMethod};

// =============================================================================
// Core Error
// =============================================================================

/// Core business rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The payment method cannot settle in the selected currency.
    ///
    /// The UI never offers such a combination; reaching this error means a
    /// caller bypassed [`PaymentMethod::corrected_for`].
    #[error("payment method {method:?} is not available for currency {currency}")]
    PaymentNotAllowedForCurrency {
        method: PaymentMethod,
        currency: Currency,
    },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when checkout form input doesn't meet requirements. Each
/// variant maps to an inline, per-field message next to the offending input.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
