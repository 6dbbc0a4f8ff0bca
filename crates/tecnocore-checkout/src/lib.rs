//! # tecnocore-checkout: Checkout Workflow
//!
//! The multi-step checkout for the TecnoCore storefront.
//!
//! ## Workflow States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Workflow                                  │
//! │                                                                         │
//! │   PersonalInfo ──► Shipping ──► Payment ──► Confirm ──► (order placed)  │
//! │        │  ▲            │▲           │▲          │                       │
//! │        │  └────────────┘└───────────┘└──────────┘                       │
//! │        │        backward navigation unrestricted                       │
//! │        │                                                                │
//! │        └── forward gate: personal data must validate                    │
//! │                                                                         │
//! │   confirm_order(): at most once per session, guarded against            │
//! │   double-submit, aborts on an emptied cart.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no backend behind the confirmation: the order is persisted
//! locally and the sale completes over WhatsApp, for which [`message`]
//! builds the pre-filled deep link.

pub mod error;
pub mod message;
pub mod workflow;

pub use error::{CheckoutError, CheckoutResult};
pub use message::{order_message, whatsapp_url};
pub use workflow::{CheckoutConfig, CheckoutSession, CheckoutStep, CheckoutSummary};
