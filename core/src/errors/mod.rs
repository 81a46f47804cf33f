//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors.
///
/// These are the terminal error kinds the HTTP layer maps onto status
/// codes: `NotAuthorized` → 401, `BadRequest` → 400, `NotFound` → 404,
/// everything else → 500. The cascade never surfaces any of these to a
/// request; its failures are logged and abandoned.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Not Authorized")]
    NotAuthorized,

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("internal error: {message}")]
    Internal { message: String },

    // Bridges to the specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Convenience constructor for client-correctable failures.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Convenience constructor for unexpected failures.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Token signing failures.
///
/// Expired or otherwise unacceptable tokens are *not* errors: verification
/// reports them through `VerificationOutcome`. Signing can only fail on
/// misconfiguration, which is fatal at startup and never retried.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("jwt signing secret is not configured")]
    MissingSecret,

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Storage collaborator failures.
///
/// `NotFound` and `Unavailable` are deliberately distinct variants: the
/// inventory cascade retries `Unavailable` but treats `NotFound` as
/// already-converged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("duplicate {field}")]
    Duplicate { field: &'static str },

    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
}

impl RepositoryError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
