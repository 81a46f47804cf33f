//! In-memory product store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sf_shared::types::{Page, Pagination};

use sf_core::domain::entities::product::Product;
use sf_core::errors::RepositoryError;
use sf_core::repositories::{ProductFilter, ProductRepository};

/// HashMap-backed [`ProductRepository`].
#[derive(Default, Clone)]
pub struct MemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        if products.values().any(|existing| existing.name == product.name) {
            return Err(RepositoryError::Duplicate { field: "name" });
        }

        tracing::debug!(product_id = %product.id, "storing product");
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .find(|product| product.name == name)
            .cloned())
    }

    async fn update(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(RepositoryError::NotFound { entity: "product" });
        }

        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let product = products
            .remove(&id)
            .ok_or(RepositoryError::NotFound { entity: "product" })?;

        tracing::debug!(product_id = %id, "removed product");
        Ok(product)
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        pagination: Pagination,
    ) -> Result<Page<Product>, RepositoryError> {
        let products = self.products.read().await;

        let mut matching: Vec<Product> = products
            .values()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit as usize)
            .collect();

        Ok(Page::new(items, total, pagination))
    }
}
