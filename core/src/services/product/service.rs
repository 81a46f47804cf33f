//! Product service: catalog CRUD plus the deletion event.

use std::sync::Arc;

use uuid::Uuid;

use sf_shared::types::{Page, Pagination};

use crate::domain::entities::product::{Product, ProductStatus};
use crate::errors::{DomainError, DomainResult};
use crate::events::bus::EventBus;
use crate::events::topics::{self, ProductDeleted};
use crate::repositories::{ProductFilter, ProductRepository};

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    pub tags: Vec<String>,
    pub created_by: Uuid,
}

/// Partial update of a product.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Catalog operations.
pub struct ProductService<P: ProductRepository> {
    products: Arc<P>,
    bus: Arc<EventBus>,
}

impl<P: ProductRepository> ProductService<P> {
    pub fn new(products: Arc<P>, bus: Arc<EventBus>) -> Self {
        Self { products, bus }
    }

    /// Create a product; names are unique across the catalog.
    pub async fn create(&self, input: NewProduct) -> DomainResult<Product> {
        if self.products.find_by_name(&input.name).await?.is_some() {
            return Err(DomainError::bad_request("product already exists"));
        }

        let product = Product::new(
            input.name,
            input.description,
            input.price_cents,
            input.category,
            input.tags,
            input.created_by,
        );
        Ok(self.products.create(product).await?)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { resource: "product" })
    }

    pub async fn update(&self, id: Uuid, patch: ProductPatch) -> DomainResult<Product> {
        let mut product = self.get(id).await?;

        if let Some(name) = patch.name {
            if name != product.name && self.products.find_by_name(&name).await?.is_some() {
                return Err(DomainError::bad_request("product name already in use"));
            }
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price_cents) = patch.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(tags) = patch.tags {
            product.tags = tags;
        }
        product.updated_at = chrono::Utc::now();

        Ok(self.products.update(product).await?)
    }

    /// Move a product between draft and published.
    pub async fn set_status(&self, id: Uuid, status: ProductStatus) -> DomainResult<Product> {
        let mut product = self.get(id).await?;
        product.set_status(status);
        Ok(self.products.update(product).await?)
    }

    pub async fn list(
        &self,
        filter: &ProductFilter,
        pagination: Pagination,
    ) -> DomainResult<Page<Product>> {
        Ok(self.products.list(filter, pagination).await?)
    }

    /// Hard-delete a product and announce it on the bus.
    ///
    /// The `productDeleted` event is published fire-and-forget: the
    /// response to the caller never waits for the inventory cascade, which
    /// may finish well after this method returns.
    pub async fn delete(&self, id: Uuid) -> DomainResult<Product> {
        let product = self.products.delete(id).await?;

        let payload = serde_json::to_value(ProductDeleted { product_id: id })
            .map_err(|error| DomainError::internal(format!("encoding event payload: {error}")))?;
        let notified = self.bus.publish(topics::PRODUCT_DELETED, payload);

        tracing::info!(product_id = %id, handlers = notified, "product deleted");
        Ok(product)
    }
}
