//! # tecnocore-core: Pure Business Logic for the TecnoCore Storefront
//!
//! This crate is the **heart** of the storefront engine. It contains all
//! business logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    TecnoCore Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌────────────────────┐   │
//! │  │ tecnocore-rates │   │ tecnocore-orders │   │ tecnocore-checkout │   │
//! │  │ (HTTP polling)  │   │ (JSON storage)   │   │ (workflow)         │   │
//! │  └────────┬────────┘   └────────┬─────────┘   └─────────┬──────────┘   │
//! │           │                     │                       │              │
//! │           └─────────────────────┼───────────────────────┘              │
//! │                                 ▼                                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ tecnocore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │   │   │
//! │  │   │  Order    │  │   Money   │  │   Cart    │  │ USDT↔ARS  │   │   │
//! │  │   │  enums    │  │  (cents)  │  │ CartItem  │  │  totals   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, Currency, PaymentMethod, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Shopping cart and its line items
//! - [`pricing`] - Currency conversion and order totals
//! - [`validation`] - Checkout form validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network and timer access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tecnocore_core::Money` instead of
// `use tecnocore_core::money::Money`

pub use cart::{Cart, CartItem, CartState, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::OrderTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shipping cost for ViaCargo branch delivery, in base-currency cents.
///
/// A fixed, statically known amount: delivery to a ViaCargo branch costs
/// 16,000 base units regardless of cart contents. Pickup at the store is
/// free. Catalog prices and this constant share the same base currency
/// (USDT-equivalent units), so the sum converts to ARS at display time.
pub const VIACARGO_SHIPPING_CENTS: i64 = 16_000 * 100;
