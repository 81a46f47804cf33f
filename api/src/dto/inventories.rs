//! Inventory DTOs.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use sf_core::services::inventory::NewInventory;

/// Request body for POST /api/v1/inventories
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInventoryRequest {
    pub product_id: Uuid,

    pub quantity: u32,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
}

impl From<CreateInventoryRequest> for NewInventory {
    fn from(request: CreateInventoryRequest) -> Self {
        Self {
            product_id: request.product_id,
            quantity: request.quantity,
            location: request.location,
        }
    }
}

/// Request body for stock adjustments
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct AdjustStockRequest {
    #[validate(range(min = 1, message = "units must be positive"))]
    pub units: u32,
}

/// Request body for PATCH /api/v1/inventories/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInventoryRequest {
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
}
