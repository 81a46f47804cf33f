//! Product entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible only to its owner
    Draft,
    /// Listed in the public catalog
    Published,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,

    /// Display name, unique across the catalog
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price in the smallest currency unit
    pub price_cents: i64,

    /// Catalog category
    pub category: String,

    /// Search tags
    pub tags: Vec<String>,

    /// Publication state
    pub status: ProductStatus,

    /// The user that created this product
    pub created_by: Uuid,

    /// Timestamp when the product was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the product was last updated
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new draft product
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price_cents: i64,
        category: impl Into<String>,
        tags: Vec<String>,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price_cents,
            category: category.into(),
            tags,
            status: ProductStatus::Draft,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the product into the given publication state
    pub fn set_status(&mut self, status: ProductStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn is_published(&self) -> bool {
        self.status == ProductStatus::Published
    }
}
