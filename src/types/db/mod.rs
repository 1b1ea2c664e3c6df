// Database document models (BSON shapes persisted in MongoDB)
pub mod clock_in;
pub mod item;

pub use clock_in::ClockInDocument;
pub use item::{midnight_utc, EmailCountRow, ItemDocument};
