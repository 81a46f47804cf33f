//! Request authentication gate.
//!
//! Per request: extract the bearer access token, verify it, and either
//! inject the caller's identity into the request context or reject. An
//! expired access token is renewed transparently when the long-lived
//! refresh token cookie is present and valid — the fresh access token is
//! surfaced to the client through the `Authorization` header of the
//! *response*. Refresh tokens themselves are never renewed; when they are
//! gone or bad the client has to log in again.
//!
//! Renewal is computed fresh per request. Concurrent renewals against the
//! same refresh token are fine: minting is idempotent and side-effect-free
//! (there is no server-side revocation list in this design).

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderValue, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use sf_core::domain::entities::token::{Claims, Identity, TokenKind, VerificationOutcome};
use sf_core::domain::entities::user::UserRole;
use sf_core::services::TokenService;

use crate::error::ApiError;

/// Name of the HTTP-only cookie carrying the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the token claims
    pub user_id: Uuid,
    /// Login email embedded in the claims
    pub email: String,
    /// Role embedded in the claims
    pub role: UserRole,
}

impl AuthContext {
    /// Build the context from verified claims.
    ///
    /// A subject that does not parse as a UUID cannot come from a token
    /// this system signed, so callers treat the failure as an invalid
    /// token.
    fn from_claims(claims: &Claims) -> Result<Self, ApiError> {
        let identity = claims.identity().map_err(|_| ApiError::NotAuthorized)?;
        Ok(Self {
            user_id: identity.user_id,
            email: identity.email,
            role: identity.role,
        })
    }

    /// The identity used when minting tokens for this caller
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Authentication gate middleware factory
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// Authentication gate middleware service
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(ApiError::NotAuthorized.into()),
            };

            match tokens.verify(&token) {
                VerificationOutcome::Invalid => Err(ApiError::NotAuthorized.into()),
                // A refresh token in the Authorization header does not
                // authorize anything, however fresh its signature.
                VerificationOutcome::Valid(claims) if claims.kind != TokenKind::Access => {
                    Err(ApiError::NotAuthorized.into())
                }
                VerificationOutcome::Valid(claims) => {
                    let context = AuthContext::from_claims(&claims)?;
                    req.extensions_mut().insert(context);
                    service.call(req).await
                }
                VerificationOutcome::Expired(_) => {
                    // The access token is stale; try a silent renewal from
                    // the refresh token cookie.
                    let refresh_token = match req.cookie(REFRESH_TOKEN_COOKIE) {
                        Some(cookie) => cookie.value().to_string(),
                        None => {
                            return Err(ApiError::BadRequest(
                                "you may need to login again".to_string(),
                            )
                            .into())
                        }
                    };

                    // Refresh tokens are not themselves renewable: expired
                    // counts as unusable, same as invalid. The cookie must
                    // actually hold a refresh token, not a copied access
                    // token.
                    let claims = match tokens.verify(&refresh_token) {
                        VerificationOutcome::Valid(claims)
                            if claims.kind == TokenKind::Refresh =>
                        {
                            claims
                        }
                        _ => return Err(ApiError::NotAuthorized.into()),
                    };

                    let context = AuthContext::from_claims(&claims)?;
                    let renewed = tokens
                        .issue_access_token(&context.identity())
                        .map_err(|error| {
                            log::error!("access token renewal failed: {error}");
                            ApiError::Internal
                        })?;

                    req.extensions_mut().insert(context);
                    let mut res = service.call(req).await?;

                    let header_value =
                        HeaderValue::from_str(&format!("Bearer {}", renewed.token))
                            .map_err(|_| ApiError::Internal)?;
                    res.headers_mut().insert(AUTHORIZATION, header_value);
                    Ok(res)
                }
            }
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::NotAuthorized.into());

        ready(result)
    }
}
