//! # tecnocore-orders: Order History Store
//!
//! Durable, single-writer order history. Orders arrive from the checkout
//! workflow fully formed; this crate keeps them newest-first, lets a human
//! walk their status forward (or backward - transitions are unrestricted),
//! and persists the full list on every mutation.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Persistence                                   │
//! │                                                                         │
//! │   OrderStore::open() ──► storage.load() ──► orders in memory            │
//! │                              │                                          │
//! │                              └── any failure: warn + start empty        │
//! │                                                                         │
//! │   add_order / update_status ──► mutate in memory ──► storage.save(all)  │
//! │                                                                         │
//! │   The document is written wholesale: one versioned JSON record,         │
//! │   never partial updates.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod storage;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use storage::{JsonFileStorage, MemoryStorage, OrderStorage, SCHEMA_VERSION};
pub use store::OrderStore;
