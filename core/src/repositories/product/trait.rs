//! Product repository trait defining the interface for catalog persistence.

use async_trait::async_trait;
use uuid::Uuid;

use sf_shared::types::{Page, Pagination};

use crate::domain::entities::product::{Product, ProductStatus};
use crate::errors::RepositoryError;

/// Catalog query filter; `None` fields match everything
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub tag: Option<String>,
    pub created_by: Option<Uuid>,
}

impl ProductFilter {
    /// Whether a product matches every set field
    pub fn matches(&self, product: &Product) -> bool {
        self.name.as_ref().map_or(true, |name| &product.name == name)
            && self
                .category
                .as_ref()
                .map_or(true, |category| &product.category == category)
            && self.status.map_or(true, |status| product.status == status)
            && self
                .tag
                .as_ref()
                .map_or(true, |tag| product.tags.contains(tag))
            && self
                .created_by
                .map_or(true, |creator| product.created_by == creator)
    }
}

/// Repository trait for Product entity persistence operations
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn create(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Find a product by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;

    /// Find a product by its unique display name
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;

    /// Replace a stored product
    ///
    /// Returns `RepositoryError::NotFound` when no product with the same id
    /// exists.
    async fn update(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Remove a product, returning the removed entity
    ///
    /// Returns `RepositoryError::NotFound` when it was already gone.
    async fn delete(&self, id: Uuid) -> Result<Product, RepositoryError>;

    /// List products matching the filter, newest first
    async fn list(
        &self,
        filter: &ProductFilter,
        pagination: Pagination,
    ) -> Result<Page<Product>, RepositoryError>;
}
