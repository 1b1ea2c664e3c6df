use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::types::dto::items::CreateItemRequest;

/// Item document as stored in the "items" collection
///
/// `expiry_date` is persisted as a BSON datetime pinned to midnight UTC of the
/// supplied calendar date. `insert_date` is assigned once at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub item_name: String,
    pub quantity: i64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub expiry_date: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub insert_date: DateTime<Utc>,
}

impl ItemDocument {
    /// Build a new document from a create request
    ///
    /// `insert_date` is the caller-supplied creation instant so the stored
    /// value and the value returned to the client are identical.
    pub fn from_create(request: &CreateItemRequest, insert_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: request.name.clone(),
            email: request.email.0.clone(),
            item_name: request.item_name.clone(),
            quantity: request.quantity,
            expiry_date: midnight_utc(request.expiry_date),
            insert_date,
        }
    }
}

/// Normalize a calendar date to a UTC timestamp at midnight of that day
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// One row of the counts-by-email aggregation
///
/// MongoDB's `$group` stage emits the grouping key as `_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailCountRow {
    #[serde(rename = "_id")]
    pub email: String,
    pub count: i64,
}
