//! Terminal error handling for the HTTP layer.
//!
//! Every request-path failure funnels into [`ApiError`], which maps the
//! domain taxonomy onto status codes and the serialized
//! `{"errors":[{"message": ...}]}` body. Cascade failures never pass
//! through here — they belong to no request.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use sf_core::errors::{DomainError, RepositoryError};
use sf_shared::types::ErrorBody;

/// Request-terminal error.
#[derive(Debug)]
pub enum ApiError {
    /// Missing, invalid or unrenewable credentials
    NotAuthorized,
    /// Client error the caller can correct (re-login, fix input)
    BadRequest(String),
    /// Requested entity does not exist
    NotFound(&'static str),
    /// Anything unexpected; details are logged, not leaked
    Internal,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthorized => write!(f, "Not Authorized"),
            Self::BadRequest(message) => write!(f, "{message}"),
            Self::NotFound(resource) => write!(f, "{resource} not found"),
            Self::Internal => write!(f, "internal server error"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotAuthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::message(self.to_string()))
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotAuthorized => Self::NotAuthorized,
            DomainError::BadRequest { message } => Self::BadRequest(message),
            DomainError::NotFound { resource } => Self::NotFound(resource),
            DomainError::Repository(RepositoryError::NotFound { entity }) => Self::NotFound(entity),
            DomainError::Repository(RepositoryError::Duplicate { field }) => {
                Self::BadRequest(format!("duplicate {field}"))
            }
            other => {
                log::error!("unexpected domain error: {other}");
                Self::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotAuthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("user").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let error: ApiError =
            DomainError::from(RepositoryError::NotFound { entity: "product" }).into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_masks_details() {
        let error: ApiError = DomainError::internal("secret database string").into();
        assert_eq!(error.to_string(), "internal server error");
    }
}
