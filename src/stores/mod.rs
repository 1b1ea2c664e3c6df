// Data access layer - one store per collection
pub mod clock_in_store;
pub mod filter;
pub mod item_store;

pub use clock_in_store::{ClockInFilter, ClockInStore};
pub use filter::{FilterBuilder, Predicate};
pub use item_store::{ItemFilter, ItemStore};
