//! Product catalog endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sf_core::repositories::{InventoryRepository, ProductRepository, UserRepository};
use sf_shared::types::ApiResponse;

use crate::dto::products::{
    CreateProductRequest, ProductListQuery, ProductStatusRequest, UpdateProductRequest,
};
use crate::dto::validate_body;
use crate::error::ApiError;
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for POST /api/v1/products
pub async fn create<U, P, I>(
    context: AuthContext,
    state: web::Data<AppState<U, P, I>>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let product = state
        .products
        .create(body.into_inner().into_new_product(context.user_id))
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Product created successfully",
        product,
    )))
}

/// Handler for GET /api/v1/products/{id}
pub async fn get<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let product = state.products.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Product fetched successfully",
        product,
    )))
}

/// Handler for GET /api/v1/products
///
/// Supports filtering by name, category, status, tag and creator, plus
/// `page`/`limit` pagination.
pub async fn list<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let page = state
        .products
        .list(&query.filter(), query.pagination())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Products fetched successfully",
        page,
    )))
}

/// Handler for PATCH /api/v1/products/{id}
pub async fn update<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let product = state
        .products
        .update(path.into_inner(), body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Product updated successfully",
        product,
    )))
}

/// Handler for PATCH /api/v1/products/{id}/status
pub async fn set_status<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
    body: web::Json<ProductStatusRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let product = state
        .products
        .set_status(path.into_inner(), body.status)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Product status updated successfully",
        product,
    )))
}

/// Handler for DELETE /api/v1/products/{id}
///
/// The response returns as soon as the product row is gone; the dependent
/// inventory record is cleaned up asynchronously by the deletion cascade.
pub async fn delete<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let product = state.products.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Product deleted successfully",
        product,
    )))
}
