//! Authentication endpoints: signup and login.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpResponse};

use sf_core::domain::entities::user::UserRole;
use sf_core::repositories::{InventoryRepository, ProductRepository, UserRepository};
use sf_shared::types::ApiResponse;

use crate::dto::auth::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse};
use crate::dto::validate_body;
use crate::error::ApiError;
use crate::middleware::auth::REFRESH_TOKEN_COOKIE;

use super::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// Registers a new account. The response carries only the id and email —
/// no tokens are issued until login.
pub async fn signup<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    body: web::Json<SignUpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let user = state
        .users
        .register(&body.email, &body.password, UserRole::User)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Registration successful",
        SignUpResponse::from(user),
    )))
}

/// Handler for POST /api/v1/auth/login
///
/// Key-pair issuance: the short-lived access token is returned in the
/// body, the long-lived refresh token only as an HTTP-only cookie scoped
/// to the whole API (the renewal path reads it back from there).
pub async fn login<U, P, I>(
    state: web::Data<AppState<U, P, I>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    validate_body(&body.0)?;

    let (user, pair) = state.users.login(&body.email, &body.password).await?;
    log::info!("user {} logged in", user.id);

    let refresh_cookie = Cookie::build(REFRESH_TOKEN_COOKIE, pair.refresh_token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(pair.refresh_expires_in))
        .finish();

    Ok(HttpResponse::Ok().cookie(refresh_cookie).json(ApiResponse::success(
        "Logged in successfully",
        LoginResponse::from_pair(&pair),
    )))
}
