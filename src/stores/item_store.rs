use chrono::{NaiveDate, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, from_document, Document};
use mongodb::{Collection, Database};

use crate::errors::internal::InternalError;
use crate::stores::filter::{FilterBuilder, Predicate};
use crate::types::db::{midnight_utc, EmailCountRow, ItemDocument};
use crate::types::dto::items::{CreateItemRequest, UpdateItemRequest};

const COLLECTION_NAME: &str = "items";

/// Optional constraints for the item filter endpoint, combined with AND
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Exact email match
    pub email: Option<String>,
    /// Matches items expiring strictly after this date
    pub expiry_after: Option<NaiveDate>,
    /// Matches items with quantity greater than or equal
    pub min_quantity: Option<i64>,
}

/// Data access for the "items" collection
pub struct ItemStore {
    collection: Collection<ItemDocument>,
}

impl ItemStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// Insert a new item and re-fetch the stored document
    ///
    /// `insert_date` is assigned here, once, from the current UTC time.
    pub async fn create(
        &self,
        request: &CreateItemRequest,
    ) -> Result<Option<ItemDocument>, InternalError> {
        let document = ItemDocument::from_create(request, Utc::now());

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| InternalError::parse("ObjectId", "insert did not return an ObjectId"))?;

        tracing::debug!("Inserted item {}", id.to_hex());

        self.find_by_id(id).await
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<ItemDocument>, InternalError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| InternalError::database("find_item", e))
    }

    /// Apply a partial update, then return the current full record
    ///
    /// Only supplied fields are written. When every field is omitted the
    /// stored record is returned unchanged.
    pub async fn update(
        &self,
        id: ObjectId,
        request: &UpdateItemRequest,
    ) -> Result<Option<ItemDocument>, InternalError> {
        let update = item_update_document(request);

        if !update.is_empty() {
            self.collection
                .update_one(doc! { "_id": id }, doc! { "$set": update })
                .await
                .map_err(|e| InternalError::database("update_item", e))?;
        }

        self.find_by_id(id).await
    }

    /// Delete by id, reporting whether a record was removed
    pub async fn delete(&self, id: ObjectId) -> Result<bool, InternalError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(result.deleted_count > 0)
    }

    /// Fetch all items matching the supplied constraints
    pub async fn filter(&self, filter: &ItemFilter) -> Result<Vec<ItemDocument>, InternalError> {
        let query = FilterBuilder::new()
            .maybe("email", Predicate::Eq, filter.email.clone())
            .maybe(
                "expiry_date",
                Predicate::Gt,
                filter
                    .expiry_after
                    .map(|date| bson::DateTime::from_chrono(midnight_utc(date))),
            )
            .maybe("quantity", Predicate::Gte, filter.min_quantity)
            .build();

        let cursor = self
            .collection
            .find(query)
            .await
            .map_err(|e| InternalError::database("filter_items", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| InternalError::database("filter_items", e))
    }

    /// Count items grouped by email
    pub async fn counts_by_email(&self) -> Result<Vec<EmailCountRow>, InternalError> {
        let pipeline = vec![doc! { "$group": { "_id": "$email", "count": { "$sum": 1 } } }];

        let mut cursor = self
            .collection
            .aggregate(pipeline)
            .await
            .map_err(|e| InternalError::database("aggregate_items_by_email", e))?;

        let mut rows = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| InternalError::database("aggregate_items_by_email", e))?
        {
            let row: EmailCountRow = from_document(document)
                .map_err(|e| InternalError::parse("EmailCountRow", e.to_string()))?;
            rows.push(row);
        }

        Ok(rows)
    }
}

/// Build the `$set` document for a partial item update
///
/// Only supplied fields are included. `expiry_date` is normalized to midnight
/// UTC of the given day. `insert_date` is never part of the update.
pub fn item_update_document(request: &UpdateItemRequest) -> Document {
    let mut update = Document::new();

    if let Some(name) = &request.name {
        update.insert("name", name);
    }
    if let Some(email) = &request.email {
        update.insert("email", &email.0);
    }
    if let Some(item_name) = &request.item_name {
        update.insert("item_name", item_name);
    }
    if let Some(quantity) = request.quantity {
        update.insert("quantity", quantity);
    }
    if let Some(expiry_date) = request.expiry_date {
        update.insert(
            "expiry_date",
            bson::DateTime::from_chrono(midnight_utc(expiry_date)),
        );
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::Email;

    #[test]
    fn test_update_document_empty_when_no_fields_supplied() {
        let update = item_update_document(&UpdateItemRequest::default());

        assert!(update.is_empty());
    }

    #[test]
    fn test_update_document_includes_only_supplied_fields() {
        let request = UpdateItemRequest {
            quantity: Some(7),
            ..Default::default()
        };

        let update = item_update_document(&request);

        assert_eq!(update.len(), 1);
        assert_eq!(update.get_i64("quantity").unwrap(), 7);
    }

    #[test]
    fn test_update_document_never_touches_insert_date() {
        let request = UpdateItemRequest {
            name: Some("B".to_string()),
            email: Some(Email("b@x.com".to_string())),
            item_name: Some("Gadget".to_string()),
            quantity: Some(1),
            expiry_date: Some(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
        };

        let update = item_update_document(&request);

        assert!(!update.contains_key("insert_date"));
        assert_eq!(update.len(), 5);
    }

    #[test]
    fn test_update_document_normalizes_expiry_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let request = UpdateItemRequest {
            expiry_date: Some(date),
            ..Default::default()
        };

        let update = item_update_document(&request);

        let stored = update.get_datetime("expiry_date").unwrap();
        assert_eq!(stored.to_chrono(), midnight_utc(date));
    }
}
