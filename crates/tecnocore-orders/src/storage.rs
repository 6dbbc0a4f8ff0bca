//! # Order Storage Backends
//!
//! The storage seam for the order history. The persisted form is a single
//! versioned JSON document holding the complete order list - mirroring the
//! storefront's one namespaced browser-storage record - rewritten wholesale
//! on every mutation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use tecnocore_core::Order;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Persisted Document
// =============================================================================

/// Current schema version of the persisted order document.
pub const SCHEMA_VERSION: u32 = 1;

/// Default file name, namespaced like the original storage key.
pub const DEFAULT_FILE_NAME: &str = "tecnocore-orders.json";

/// The document as written to disk.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderDocument {
    schema_version: u32,
    orders: Vec<Order>,
}

// =============================================================================
// Storage Seam
// =============================================================================

/// Durable backend for the order list.
///
/// `save` receives the complete list every time; backends never see
/// incremental updates.
#[async_trait]
pub trait OrderStorage: Send + Sync {
    /// Loads the full order list. A backend with nothing saved yet returns
    /// an empty list, not an error.
    async fn load(&self) -> StoreResult<Vec<Order>>;

    /// Persists the full order list.
    async fn save(&self, orders: &[Order]) -> StoreResult<()>;
}

// =============================================================================
// JSON File Storage
// =============================================================================

/// File-backed storage: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Creates a storage using [`DEFAULT_FILE_NAME`] inside a directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        JsonFileStorage {
            path: dir.as_ref().join(DEFAULT_FILE_NAME),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OrderStorage for JsonFileStorage {
    async fn load(&self) -> StoreResult<Vec<Order>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            // No file yet means no saved orders, not a failure.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no order document yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document: OrderDocument = serde_json::from_slice(&raw)?;
        if document.schema_version != SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: document.schema_version,
                supported: SCHEMA_VERSION,
            });
        }

        debug!(
            path = %self.path.display(),
            orders = document.orders.len(),
            "order document loaded"
        );
        Ok(document.orders)
    }

    async fn save(&self, orders: &[Order]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let document = OrderDocument {
            schema_version: SCHEMA_VERSION,
            orders: orders.to_vec(),
        };
        let raw = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(&self.path, raw).await?;

        debug!(path = %self.path.display(), orders = orders.len(), "order document saved");
        Ok(())
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// Memory-backed storage for tests and ephemeral embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    orders: Mutex<Vec<Order>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Creates a storage pre-seeded with orders.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        MemoryStorage {
            orders: Mutex::new(orders),
        }
    }
}

#[async_trait]
impl OrderStorage for MemoryStorage {
    async fn load(&self) -> StoreResult<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    async fn save(&self, orders: &[Order]) -> StoreResult<()> {
        *self.orders.lock().unwrap_or_else(|e| e.into_inner()) = orders.to_vec();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tecnocore_core::{
        CartItem, Currency, Money, OrderStatus, PaymentMethod, PersonalData, ShippingAddress,
        ShippingMethod,
    };

    fn test_order(order_id: &str) -> Order {
        Order {
            order_id: order_id.to_string(),
            personal_data: PersonalData {
                first_name: "Ana".to_string(),
                last_name: "García".to_string(),
                email: "ana@example.com".to_string(),
                phone: "+54 11 5555-0000".to_string(),
                dni: "30123456".to_string(),
            },
            shipping_address: ShippingAddress::default(),
            shipping_method: ShippingMethod::Pickup,
            payment_method: PaymentMethod::Transfer,
            currency: Currency::Usdt,
            exchange_rate_at_confirmation: 1300,
            items: vec![CartItem::new("p1", "Product 1", Money::from_major(500)).with_quantity(2)],
            subtotal_cents: 100_000,
            shipping_cost_cents: 0,
            total_cents: 100_000,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());

        let orders = vec![test_order("TC000001"), test_order("TC000002")];
        storage.save(&orders).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].order_id, "TC000001");
        assert_eq!(loaded[0].items[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());

        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());
        tokio::fs::write(storage.path(), b"{ not json")
            .await
            .unwrap();

        let err = storage.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_unknown_schema_version_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());
        tokio::fs::write(storage.path(), br#"{"schemaVersion":99,"orders":[]}"#)
            .await
            .unwrap();

        let err = storage.load().await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedSchema {
                found: 99,
                supported: SCHEMA_VERSION
            }
        ));
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/orders.json"));

        storage.save(&[test_order("TC000003")]).await.unwrap();
        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().await.unwrap().is_empty());

        storage.save(&[test_order("TC000004")]).await.unwrap();
        assert_eq!(storage.load().await.unwrap().len(), 1);
    }
}
