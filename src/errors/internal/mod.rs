use thiserror::Error;

pub mod database;

pub use database::DatabaseError;

/// Internal error type for store operations
///
/// Not exposed via API - endpoints must convert to ItemApiError or
/// ClockInApiError at the boundary.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Malformed identifier: {value:?} is not a valid document id")]
    MalformedId { value: String },

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },
}

impl InternalError {
    pub fn database(operation: &str, source: mongodb::error::Error) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn malformed_id(value: &str) -> InternalError {
        InternalError::MalformedId {
            value: value.to_string(),
        }
    }

    pub fn parse(value_type: &str, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.to_string(),
            message: message.into(),
        }
    }
}
