// API-facing error types
pub mod clock_in;
pub mod items;

// Re-exports for convenience
pub use clock_in::ClockInApiError;
pub use items::ItemApiError;
