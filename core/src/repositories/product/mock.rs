//! Mock implementation of ProductRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sf_shared::types::{Page, Pagination};

use crate::domain::entities::product::Product;
use crate::errors::RepositoryError;

use super::r#trait::{ProductFilter, ProductRepository};

/// Mock product repository for testing
#[derive(Default)]
pub struct MockProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        if products.values().any(|existing| existing.name == product.name) {
            return Err(RepositoryError::Duplicate { field: "name" });
        }

        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.values().find(|product| product.name == name).cloned())
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
        products
            .remove(&id)
            .ok_or(RepositoryError::NotFound { entity: "product" })
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
