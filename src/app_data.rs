use std::sync::Arc;

use mongodb::Database;

use crate::stores::{ClockInStore, ItemStore};

/// Centralized application data following the main-owned stores pattern
///
/// The database handle and both stores are created once in main.rs and
/// shared across API structs. The handle is the only process-wide state;
/// it is safe for concurrent use by simultaneous requests.
pub struct AppData {
    pub database: Database,
    pub item_store: Arc<ItemStore>,
    pub clock_in_store: Arc<ClockInStore>,
}

impl AppData {
    pub fn init(database: Database) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(&database));
        let clock_in_store = Arc::new(ClockInStore::new(&database));
        tracing::debug!("Stores created");

        Self {
            database,
            item_store,
            clock_in_store,
        }
    }
}
