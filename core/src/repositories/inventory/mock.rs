//! Mock implementation of InventoryRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::inventory::Inventory;
use crate::errors::RepositoryError;

use super::r#trait::InventoryRepository;

/// Mock inventory repository for testing
#[derive(Default)]
pub struct MockInventoryRepository {
    records: Arc<RwLock<HashMap<Uuid, Inventory>>>,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn create(&self, inventory: Inventory) -> Result<Inventory, RepositoryError> {
        let mut records = self.records.write().await;

        if records
            .values()
            .any(|existing| existing.product_id == inventory.product_id)
        {
            return Err(RepositoryError::Duplicate { field: "product_id" });
        }

        records.insert(inventory.id, inventory.clone());
        Ok(inventory)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inventory>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_product(&self, product_id: Uuid) -> Result<Option<Inventory>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records
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
            .map(|_| ())
            .ok_or(RepositoryError::NotFound { entity: "inventory" })
    }
}
