use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::errors::internal::InternalError;
use crate::stores::filter::{FilterBuilder, Predicate};
use crate::types::db::ClockInDocument;
use crate::types::dto::clock_in::CreateClockInRequest;

const COLLECTION_NAME: &str = "clock-ins";

/// Optional constraints for the clock-in filter endpoint, combined with AND
#[derive(Debug, Clone, Default)]
pub struct ClockInFilter {
    /// Exact email match
    pub email: Option<String>,
    /// Exact location match
    pub location: Option<String>,
    /// Matches records created strictly after this instant
    pub after: Option<DateTime<Utc>>,
}

/// Data access for the "clock-ins" collection
pub struct ClockInStore {
    collection: Collection<ClockInDocument>,
}

impl ClockInStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// Insert a new clock-in record and re-fetch the stored document
    ///
    /// `insert_datetime` is assigned here, once, from the current UTC time.
    pub async fn create(
        &self,
        request: &CreateClockInRequest,
    ) -> Result<Option<ClockInDocument>, InternalError> {
        let document = ClockInDocument::from_create(request, Utc::now());

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| InternalError::database("insert_clock_in", e))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| InternalError::parse("ObjectId", "insert did not return an ObjectId"))?;

        tracing::debug!("Inserted clock-in {}", id.to_hex());

        self.find_by_id(id).await
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<ClockInDocument>, InternalError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| InternalError::database("find_clock_in", e))
    }

    /// Overwrite the provided fields, then return the current record
    ///
    /// Clock-in updates are full replacements of the client-supplied fields;
    /// `insert_datetime` keeps its original value.
    pub async fn update(
        &self,
        id: ObjectId,
        request: &CreateClockInRequest,
    ) -> Result<Option<ClockInDocument>, InternalError> {
        let update = clock_in_update_document(request);

        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await
            .map_err(|e| InternalError::database("update_clock_in", e))?;

        self.find_by_id(id).await
    }

    /// Delete by id, reporting whether a record was removed
    pub async fn delete(&self, id: ObjectId) -> Result<bool, InternalError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| InternalError::database("delete_clock_in", e))?;

        Ok(result.deleted_count > 0)
    }

    /// Fetch all clock-in records matching the supplied constraints
    pub async fn filter(
        &self,
        filter: &ClockInFilter,
    ) -> Result<Vec<ClockInDocument>, InternalError> {
        let query = FilterBuilder::new()
            .maybe("email", Predicate::Eq, filter.email.clone())
            .maybe("location", Predicate::Eq, filter.location.clone())
            .maybe(
                "insert_datetime",
                Predicate::Gt,
                filter.after.map(bson::DateTime::from_chrono),
            )
            .build();

        let cursor = self
            .collection
            .find(query)
            .await
            .map_err(|e| InternalError::database("filter_clock_ins", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| InternalError::database("filter_clock_ins", e))
    }
}

/// Build the `$set` document for a clock-in replacement
pub fn clock_in_update_document(request: &CreateClockInRequest) -> Document {
    doc! {
        "email": &request.email.0,
        "location": &request.location,
    }
}
