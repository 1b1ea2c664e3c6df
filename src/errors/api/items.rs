use crate::errors::internal::InternalError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// No item matches the requested identifier
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Identifier string is not a valid document id
    #[oai(status = 400)]
    MalformedId(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemApiError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Item not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create a MalformedId error
    pub fn malformed_id(value: &str) -> Self {
        ItemApiError::MalformedId(Json(ErrorResponse {
            error: "malformed_id".to_string(),
            message: format!("Invalid item ID format: {}", value),
            status_code: 400,
        }))
    }

    /// Convert InternalError to ItemApiError
    ///
    /// This is the explicit conversion point from internal errors to API
    /// errors. Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::MalformedId { value } => {
                tracing::debug!("Malformed item id: {}", value);
                Self::malformed_id(value)
            }
            InternalError::Database { .. } => {
                tracing::error!("Database error in item operation: {}", err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemApiError::NotFound(json) => json.0.message.clone(),
            ItemApiError::MalformedId(json) => json.0.message.clone(),
            ItemApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
