//! Inventory endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sf_core::repositories::{InventoryRepository, ProductRepository, UserRepository};
use sf_shared::types::ApiResponse;

use crate::dto::inventories::{
    AdjustStockRequest, CreateInventoryRequest, UpdateInventoryRequest,
};
use crate::dto::validate_body;
use crate::error::ApiError;

use super::AppState;

/// Handler for POST /api/v1/inventories
pub async fn create<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    body: web::Json<CreateInventoryRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    // The product must exist before stock can be tracked for it.
    state.products.get(body.product_id).await?;
    let inventory = state.inventories.create(body.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Inventory created successfully",
        inventory,
    )))
}

/// Handler for GET /api/v1/inventories/{id}
pub async fn get<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let inventory = state.inventories.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Inventory fetched successfully",
        inventory,
    )))
}

/// Handler for GET /api/v1/inventories/product/{product_id}
pub async fn get_by_product<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let inventory = state.inventories.get_by_product(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Inventory fetched successfully",
        inventory,
    )))
}

/// Handler for PATCH /api/v1/inventories/{id}
pub async fn update<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateInventoryRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let inventory = state
        .inventories
        .relocate(path.into_inner(), body.into_inner().location)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Inventory updated successfully",
        inventory,
    )))
}

/// Handler for POST /api/v1/inventories/product/{product_id}/add
pub async fn add_stock<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
    body: web::Json<AdjustStockRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let inventory = state
        .inventories
        .add_stock(path.into_inner(), body.units)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Stock added successfully",
        inventory,
    )))
}

/// Handler for POST /api/v1/inventories/product/{product_id}/remove
pub async fn remove_stock<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
    body: web::Json<AdjustStockRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let inventory = state
        .inventories
        .remove_stock(path.into_inner(), body.units)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Stock removed successfully",
        inventory,
    )))
}
