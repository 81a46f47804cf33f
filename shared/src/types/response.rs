//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response status, `"success"` on the happy path
    pub status: String,

    /// Human-readable summary of the operation
    pub message: String,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// A single serialized error entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// What went wrong
    pub message: String,

    /// Offending field, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// The serialized error body returned by the terminal error handler.
///
/// Every failed request, whatever the status code, carries this shape:
/// `{"errors": [{"message": "...", "field": "..."}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorMessage>,
}

impl ErrorBody {
    /// Single-message error body
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorMessage {
                message: message.into(),
                field: None,
            }],
        }
    }

    /// Error body for a failed field validation
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorMessage {
                message: message.into(),
                field: Some(field.into()),
            }],
        }
    }

    /// Merge another body's entries into this one
    pub fn merge(mut self, other: ErrorBody) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::message("Not Authorized");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"errors":[{"message":"Not Authorized"}]}"#);
    }

    #[test]
    fn test_error_body_with_field() {
        let body = ErrorBody::field("email", "invalid email format");
        assert_eq!(body.errors[0].field.as_deref(), Some("email"));
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success("Product fetched successfully", 42);
        assert_eq!(response.status, "success");
        assert_eq!(response.into_data(), Some(42));
    }
}
