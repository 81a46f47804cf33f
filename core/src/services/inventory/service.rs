//! Inventory service: stock CRUD and quantity adjustments.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::inventory::Inventory;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::InventoryRepository;

/// Input for creating an inventory record.
#[derive(Debug, Clone)]
pub struct NewInventory {
    pub product_id: Uuid,
    pub quantity: u32,
    pub location: String,
}

/// Stock operations.
pub struct InventoryService<I: InventoryRepository> {
    inventories: Arc<I>,
}

impl<I: InventoryRepository> InventoryService<I> {
    pub fn new(inventories: Arc<I>) -> Self {
        Self { inventories }
    }

    /// Create the stock record for a product (one per product).
    pub async fn create(&self, input: NewInventory) -> DomainResult<Inventory> {
        let inventory = Inventory::new(input.product_id, input.quantity, input.location);
        Ok(self.inventories.create(inventory).await?)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Inventory> {
        self.inventories
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { resource: "inventory" })
    }

    pub async fn get_by_product(&self, product_id: Uuid) -> DomainResult<Inventory> {
        self.inventories
            .find_by_product(product_id)
            .await?
            .ok_or(DomainError::NotFound { resource: "inventory" })
    }

    /// Move the record to another location.
    pub async fn relocate(&self, id: Uuid, location: String) -> DomainResult<Inventory> {
        let mut inventory = self.get(id).await?;
        inventory.location = location;
        inventory.updated_at = chrono::Utc::now();
        Ok(self.inventories.update(inventory).await?)
    }

    /// Add units to a product's stock.
    pub async fn add_stock(&self, product_id: Uuid, units: u32) -> DomainResult<Inventory> {
        let mut inventory = self.get_by_product(product_id).await?;
        inventory.add(units);
        Ok(self.inventories.update(inventory).await?)
    }

    /// Remove units from a product's stock.
    pub async fn remove_stock(&self, product_id: Uuid, units: u32) -> DomainResult<Inventory> {
        let mut inventory = self.get_by_product(product_id).await?;
        if !inventory.remove(units) {
            return Err(DomainError::bad_request("insufficient stock unit"));
        }
        Ok(self.inventories.update(inventory).await?)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        Ok(self.inventories.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::repositories::MockInventoryRepository;

    use super::*;

    fn service() -> InventoryService<MockInventoryRepository> {
        InventoryService::new(Arc::new(MockInventoryRepository::new()))
    }

    #[tokio::test]
    async fn test_one_record_per_product() {
        let service = service();
        let product_id = Uuid::new_v4();
        service
            .create(NewInventory {
                product_id,
                quantity: 5,
                location: "WH-1".to_string(),
            })
            .await
            .unwrap();

        let result = service
            .create(NewInventory {
                product_id,
                quantity: 9,
                location: "WH-2".to_string(),
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_add_and_remove_stock() {
        let service = service();
        let product_id = Uuid::new_v4();
        service
            .create(NewInventory {
                product_id,
                quantity: 5,
                location: "WH-1".to_string(),
            })
            .await
            .unwrap();

        let inventory = service.add_stock(product_id, 5).await.unwrap();
        assert_eq!(inventory.quantity, 10);

        let inventory = service.remove_stock(product_id, 4).await.unwrap();
        assert_eq!(inventory.quantity, 6);
    }

    #[tokio::test]
    async fn test_remove_stock_insufficient_is_bad_request() {
        let service = service();
        let product_id = Uuid::new_v4();
        service
            .create(NewInventory {
                product_id,
                quantity: 2,
                location: "WH-1".to_string(),
            })
            .await
            .unwrap();

        let result = service.remove_stock(product_id, 3).await;

        assert!(matches!(result, Err(DomainError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_get_by_product_missing_is_not_found() {
        let service = service();
        let result = service.get_by_product(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
