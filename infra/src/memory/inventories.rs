//! In-memory inventory store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sf_core::domain::entities::inventory::Inventory;
use sf_core::errors::RepositoryError;
use sf_core::repositories::InventoryRepository;

/// HashMap-backed [`InventoryRepository`].
///
/// Carries a failure-injection counter: while non-zero, lookups fail with
/// a transient error. Used to exercise the deletion cascade's retry path
/// end to end.
#[derive(Default, Clone)]
pub struct MemoryInventoryRepository {
    records: Arc<RwLock<HashMap<Uuid, Inventory>>>,
    inject_failures: Arc<AtomicU32>,
}

impl MemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` lookups fail with a transient error.
    pub fn fail_next(&self, count: u32) {
        self.inject_failures.store(count, Ordering::SeqCst);
    }

    fn take_injected_failure(&self) -> bool {
        let remaining = self.inject_failures.load(Ordering::SeqCst);
        if remaining == 0 {
            return false;
        }
        self.inject_failures.store(remaining - 1, Ordering::SeqCst);
        true
    }
}

#[async_trait]
impl InventoryRepository for MemoryInventoryRepository {
    async fn create(&self, inventory: Inventory) -> Result<Inventory, RepositoryError> {
        let mut records = self.records.write().await;

        if records
            .values()
            .any(|existing| existing.product_id == inventory.product_id)
        {
            return Err(RepositoryError::Duplicate { field: "product_id" });
        }

        tracing::debug!(inventory_id = %inventory.id, "storing inventory record");
        records.insert(inventory.id, inventory.clone());
        Ok(inventory)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inventory>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_by_product(&self, product_id: Uuid) -> Result<Option<Inventory>, RepositoryError> {
        if self.take_injected_failure() {
            return Err(RepositoryError::unavailable("injected failure"));
        }

        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|record| record.product_id == product_id)
            .cloned())
    }

    async fn update(&self, inventory: Inventory) -> Result<Inventory, RepositoryError> {
        let mut records = self.records.write().await;

        if !records.contains_key(&inventory.id) {
            return Err(RepositoryError::NotFound { entity: "inventory" });
        }

        records.insert(inventory.id, inventory.clone());
        Ok(inventory)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        records
            .remove(&id)
            .map(|record| {
                tracing::debug!(inventory_id = %record.id, "removed inventory record");
            })
            .ok_or(RepositoryError::NotFound { entity: "inventory" })
    }
}
