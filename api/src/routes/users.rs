//! Profile endpoints for the authenticated user.

use actix_web::{web, HttpResponse};

use sf_core::repositories::{InventoryRepository, ProductRepository, UserRepository};
use sf_shared::types::ApiResponse;

use crate::dto::users::{UpdateProfileRequest, UserResponse};
use crate::dto::validate_body;
use crate::error::ApiError;
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for GET /api/v1/users/me
pub async fn profile<U, P, I>(
    context: AuthContext,
    state: web::Data<AppState<U, P, I>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let user = state.users.get_user(context.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Profile fetched successfully",
        UserResponse::from(user),
    )))
}

/// Handler for PATCH /api/v1/users/me
pub async fn update_profile<U, P, I>(
    context: AuthContext,
    state: web::Data<AppState<U, P, I>>,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let user = state
        .users
        .update_user(context.user_id, body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User updated successfully",
        UserResponse::from(user),
    )))
}
