//! Request/response DTOs for the HTTP layer.

pub mod auth;
pub mod inventories;
pub mod products;
pub mod users;

use validator::Validate;

use crate::error::ApiError;

/// Validate a request body, folding the first field error into the
/// terminal BadRequest shape.
pub fn validate_body(body: &impl Validate) -> Result<(), ApiError> {
    let errors = match body.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .next()
        .unwrap_or_else(|| "invalid request".to_string());

    Err(ApiError::BadRequest(message))
}
