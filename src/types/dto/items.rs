use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::types::Email;
use poem_openapi::Object;

use crate::types::db::{EmailCountRow, ItemDocument};

/// Request model for creating a new item
#[derive(Object, Debug, Clone)]
pub struct CreateItemRequest {
    /// Name of the owner (must be non-empty)
    #[oai(validator(min_length = 1))]
    pub name: String,

    /// Email address of the owner
    pub email: Email,

    /// Name of the tracked item
    pub item_name: String,

    /// Quantity on hand (must be zero or greater)
    #[oai(validator(minimum(value = "0")))]
    pub quantity: i64,

    /// Expiry date of the item (YYYY-MM-DD)
    pub expiry_date: NaiveDate,
}

/// Request model for updating an item
///
/// Only supplied fields are written; omitted fields keep their stored values.
/// `insert_date` is never updatable.
#[derive(Object, Debug, Clone, Default)]
pub struct UpdateItemRequest {
    #[oai(validator(min_length = 1))]
    pub name: Option<String>,

    pub email: Option<Email>,

    pub item_name: Option<String>,

    #[oai(validator(minimum(value = "0")))]
    pub quantity: Option<i64>,

    /// Normalized to midnight UTC of the given day before storage
    pub expiry_date: Option<NaiveDate>,
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone)]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: String,

    pub name: String,

    pub email: String,

    pub item_name: String,

    pub quantity: i64,

    /// Expiry date (YYYY-MM-DD)
    pub expiry_date: NaiveDate,

    /// Timestamp when the item was created (ISO 8601, UTC)
    pub insert_date: DateTime<Utc>,
}

impl From<ItemDocument> for ItemResponse {
    fn from(document: ItemDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: document.name,
            email: document.email,
            item_name: document.item_name,
            quantity: document.quantity,
            expiry_date: document.expiry_date.date_naive(),
            insert_date: document.insert_date,
        }
    }
}

/// One entry of the counts-by-email aggregation
#[derive(Object, Debug, Clone)]
pub struct EmailCount {
    pub email: String,

    /// Number of items recorded under this email
    pub count: i64,
}

impl From<EmailCountRow> for EmailCount {
    fn from(row: EmailCountRow) -> Self {
        Self {
            email: row.email,
            count: row.count,
        }
    }
}
