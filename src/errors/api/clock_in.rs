use crate::errors::internal::InternalError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Clock-in endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ClockInApiError {
    /// No clock-in record matches the requested identifier
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Identifier string is not a valid document id
    #[oai(status = 400)]
    MalformedId(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ClockInApiError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ClockInApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Clock-in record not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create a MalformedId error
    pub fn malformed_id(value: &str) -> Self {
        ClockInApiError::MalformedId(Json(ErrorResponse {
            error: "malformed_id".to_string(),
            message: format!("Invalid Clock-in ID format: {}", value),
            status_code: 400,
        }))
    }

    /// Convert InternalError to ClockInApiError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::MalformedId { value } => {
                tracing::debug!("Malformed clock-in id: {}", value);
                Self::malformed_id(value)
            }
            InternalError::Database { .. } => {
                tracing::error!("Database error in clock-in operation: {}", err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        ClockInApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ClockInApiError::NotFound(json) => json.0.message.clone(),
            ClockInApiError::MalformedId(json) => json.0.message.clone(),
            ClockInApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ClockInApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
