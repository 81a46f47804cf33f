//! Product DTOs.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use sf_shared::types::Pagination;

use sf_core::domain::entities::product::ProductStatus;
use sf_core::repositories::ProductFilter;
use sf_core::services::product::{NewProduct, ProductPatch};

/// Request body for POST /api/v1/products
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price_cents: i64,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateProductRequest {
    pub fn into_new_product(self, created_by: Uuid) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            category: self.category,
            tags: self.tags,
            created_by,
        }
    }
}

/// Request body for PATCH /api/v1/products/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price_cents: Option<i64>,

    pub category: Option<String>,

    pub tags: Option<Vec<String>>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price_cents: request.price_cents,
            category: request.category,
            tags: request.tags,
        }
    }
}

/// Request body for PATCH /api/v1/products/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct ProductStatusRequest {
    pub status: ProductStatus,
}

/// Query parameters for GET /api/v1/products
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub tag: Option<String>,
    pub created_by: Option<Uuid>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductListQuery {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            name: self.name.clone(),
            category: self.category.clone(),
            status: self.status,
            tag: self.tag.clone(),
            created_by: self.created_by,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page.unwrap_or(1), self.limit.unwrap_or(10))
    }
}
