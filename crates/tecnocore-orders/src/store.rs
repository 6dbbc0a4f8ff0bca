//! # Order History Store
//!
//! In-memory order list with write-through persistence. Newest orders first.
//!
//! Mutations hold the write lock across the storage save, so the document on
//! disk is always some prefix-consistent state of the in-memory list and
//! writes cannot interleave. Nothing can mutate before [`OrderStore::open`]
//! returns, which is what keeps the initial load from ever being clobbered
//! by an empty save.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use tecnocore_core::{Order, OrderStatus};

use crate::error::StoreResult;
use crate::storage::OrderStorage;

// =============================================================================
// Order Store
// =============================================================================

/// The order history store.
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
    storage: Arc<dyn OrderStorage>,
}

impl OrderStore {
    /// Opens the store, loading whatever the backend has.
    ///
    /// A failed load is logged and degrades to an empty history - a corrupt
    /// document must never take the storefront down.
    pub async fn open(storage: Arc<dyn OrderStorage>) -> Self {
        let orders = match storage.load().await {
            Ok(orders) => {
                info!(count = orders.len(), "order history loaded");
                orders
            }
            Err(error) => {
                warn!(%error, "failed to load order history, starting empty");
                Vec::new()
            }
        };

        OrderStore {
            orders: RwLock::new(orders),
            storage,
        }
    }

    /// Adds a confirmed order at the front (newest first) and persists.
    pub async fn add_order(&self, order: Order) -> StoreResult<()> {
        let mut orders = self.orders.write().await;
        info!(order_id = %order.order_id, total_cents = order.total_cents, "order added to history");
        orders.insert(0, order);
        self.storage.save(&orders).await
    }

    /// Replaces the status of the matching order and persists.
    ///
    /// Returns `false` (and saves nothing) when no order matches. Any status
    /// may replace any other; there is no enforced progression.
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> StoreResult<bool> {
        let mut orders = self.orders.write().await;
        let Some(order) = orders.iter_mut().find(|o| o.order_id == order_id) else {
            warn!(order_id, "status update for unknown order ignored");
            return Ok(false);
        };

        info!(order_id, from = ?order.status, to = ?status, "order status updated");
        order.status = status;
        self.storage.save(&orders).await?;
        Ok(true)
    }

    /// Looks up one order by id.
    pub async fn get_by_id(&self, order_id: &str) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned()
    }

    /// Returns the orders matching a predicate, newest first.
    ///
    /// Convenience for UI search/status filters.
    pub async fn filter<F>(&self, predicate: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        self.orders
            .read()
            .await
            .iter()
            .filter(|o| predicate(o))
            .cloned()
            .collect()
    }

    /// Returns the orders in a given status, newest first.
    pub async fn by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.filter(|o| o.status == status).await
    }

    /// Returns one page of orders, newest first.
    pub async fn list_page(&self, offset: usize, limit: usize) -> Vec<Order> {
        self.orders
            .read()
            .await
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Number of orders in the history.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Checks if the history is empty.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
