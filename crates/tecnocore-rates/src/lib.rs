//! # tecnocore-rates: Exchange Rate Provider
//!
//! Polls external USDT/ARS price sources, aggregates the quotes into an
//! [`ExchangeRateSnapshot`](tecnocore_core::ExchangeRateSnapshot) and serves
//! the latest snapshot to the rest of the engine.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rate Provider Data Flow                             │
//! │                                                                         │
//! │   source A ──┐                                                          │
//! │   source B ──┼── concurrent fetch ──► aggregate ──► snapshot ──► feed   │
//! │   source C ──┘    (failures           (mean/max,     (seq-       (cart, │
//! │                    swallowed)          fallback)      guarded)  checkout)│
//! │                                                                         │
//! │   Poll every 3 minutes + on demand via refresh().                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Never Block the Sale
//! The provider has no error path to its consumers. Individual source
//! failures are logged and excluded; if every source fails, a deterministic
//! fallback list around the configured base price is substituted and the
//! snapshot is marked `degraded`. Callers always get a usable rate.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod provider;
pub mod source;

pub use aggregate::aggregate;
pub use config::{RateSourceConfig, RatesConfig};
pub use error::{RatesError, RatesResult, SourceError};
pub use provider::{RateProvider, RateProviderHandle};
pub use source::{HttpJsonSource, RateSource, SourceQuote};
