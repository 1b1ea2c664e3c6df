// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{ClockInApiError, ItemApiError};
pub use internal::InternalError;
