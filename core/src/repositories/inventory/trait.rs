//! Inventory repository trait defining the interface for stock persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::inventory::Inventory;
use crate::errors::RepositoryError;

/// Repository trait for Inventory entity persistence operations
///
/// The `product_id` column is unique: at most one inventory record per
/// product.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Persist a new inventory record
    ///
    /// Returns `RepositoryError::Duplicate` when the product already has
    /// one.
    async fn create(&self, inventory: Inventory) -> Result<Inventory, RepositoryError>;

    /// Find an inventory record by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inventory>, RepositoryError>;

    /// Find the inventory record owned by a product
    async fn find_by_product(&self, product_id: Uuid) -> Result<Option<Inventory>, RepositoryError>;

    /// Replace a stored inventory record
    ///
    /// Returns `RepositoryError::NotFound` when no record with the same id
    /// exists.
    async fn update(&self, inventory: Inventory) -> Result<Inventory, RepositoryError>;

    /// Remove an inventory record
    ///
    /// Returns `RepositoryError::NotFound` when it was already gone.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
