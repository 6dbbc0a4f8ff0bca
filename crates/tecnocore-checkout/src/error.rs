//! # Error Types
//!
//! Checkout workflow errors.
//!
//! None of these are fatal: validation failures render inline, an empty cart
//! redirects back to the catalog, and submission guards simply reject the
//! extra click.

use thiserror::Error;

use tecnocore_core::validation::PersonalDataErrors;
use tecnocore_core::{CoreError, ValidationError};
use tecnocore_orders::StoreError;

use crate::workflow::CheckoutStep;

/// Checkout workflow errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Personal data failed validation; the per-field errors are also kept
    /// on the session for inline display.
    #[error("personal data is invalid: {0}")]
    PersonalDataInvalid(PersonalDataErrors),

    /// The shipping method requires delivery but the address is incomplete.
    #[error("shipping address is incomplete ({} missing fields)", .missing.len())]
    ShippingAddressInvalid { missing: Vec<ValidationError> },

    /// The cart emptied before the order was placed; the session is invalid
    /// and the buyer returns to the catalog.
    #[error("cannot confirm an order with an empty cart")]
    EmptyCart,

    /// A confirmation is already running for this session.
    #[error("order confirmation already in progress")]
    SubmissionInFlight,

    /// This session already produced an order.
    #[error("order {order_id} was already placed in this session")]
    AlreadyCompleted { order_id: String },

    /// Confirmation was requested before reaching the confirmation step.
    #[error("cannot confirm from step {current}")]
    NotOnConfirmStep { current: CheckoutStep },

    /// Business rule violation (wraps CoreError).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The confirmed order could not be persisted.
    #[error("failed to persist order: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
