use std::sync::Arc;

use chrono::{DateTime, Utc};
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::helpers::parse_object_id;
use crate::errors::ClockInApiError;
use crate::stores::{ClockInFilter, ClockInStore};
use crate::types::dto::clock_in::{ClockInResponse, CreateClockInRequest};
use crate::types::dto::common::DeleteConfirmation;
use crate::AppData;

/// Clock-in API endpoints
pub struct ClockInApi {
    store: Arc<ClockInStore>,
}

impl ClockInApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            store: Arc::clone(&app_data.clock_in_store),
        }
    }
}

/// API tags for clock-in endpoints
#[derive(Tags)]
enum ApiTags {
    /// Clock-in record endpoints
    ClockIns,
}

#[OpenApi]
impl ClockInApi {
    /// Create a new clock-in record
    ///
    /// `insert_datetime` is assigned by the server from the current UTC time.
    #[oai(path = "/clock-in", method = "post", tag = "ApiTags::ClockIns")]
    async fn create_clock_in(
        &self,
        body: Json<CreateClockInRequest>,
    ) -> Result<Json<ClockInResponse>, ClockInApiError> {
        let created = self
            .store
            .create(&body.0)
            .await
            .map_err(ClockInApiError::from_internal_error)?;

        match created {
            Some(document) => Ok(Json(document.into())),
            None => Err(ClockInApiError::not_found()),
        }
    }

    /// Filter clock-in records
    ///
    /// All supplied filters are combined with AND. `insert_datetime` matches
    /// records created strictly after the given timestamp.
    #[oai(path = "/clock-in/filter/", method = "get", tag = "ApiTags::ClockIns")]
    async fn filter_clock_ins(
        &self,
        email: Query<Option<String>>,
        location: Query<Option<String>>,
        insert_datetime: Query<Option<DateTime<Utc>>>,
    ) -> Result<Json<Vec<ClockInResponse>>, ClockInApiError> {
        let filter = ClockInFilter {
            email: email.0,
            location: location.0,
            after: insert_datetime.0,
        };

        let records = self
            .store
            .filter(&filter)
            .await
            .map_err(ClockInApiError::from_internal_error)?;

        Ok(Json(
            records.into_iter().map(ClockInResponse::from).collect(),
        ))
    }

    /// Fetch a clock-in record by id
    #[oai(
        path = "/clock-in/:clock_in_id",
        method = "get",
        tag = "ApiTags::ClockIns"
    )]
    async fn get_clock_in(
        &self,
        clock_in_id: Path<String>,
    ) -> Result<Json<ClockInResponse>, ClockInApiError> {
        let id = parse_object_id(&clock_in_id.0).map_err(ClockInApiError::from_internal_error)?;

        let record = self
            .store
            .find_by_id(id)
            .await
            .map_err(ClockInApiError::from_internal_error)?;

        match record {
            Some(document) => Ok(Json(document.into())),
            None => Err(ClockInApiError::not_found()),
        }
    }

    /// Update a clock-in record
    ///
    /// Overwrites the provided fields; `insert_datetime` keeps its original
    /// value. Returns the record after the update is applied.
    #[oai(
        path = "/clock-in/:clock_in_id",
        method = "put",
        tag = "ApiTags::ClockIns"
    )]
    async fn update_clock_in(
        &self,
        clock_in_id: Path<String>,
        body: Json<CreateClockInRequest>,
    ) -> Result<Json<ClockInResponse>, ClockInApiError> {
        let id = parse_object_id(&clock_in_id.0).map_err(ClockInApiError::from_internal_error)?;

        let updated = self
            .store
            .update(id, &body.0)
            .await
            .map_err(ClockInApiError::from_internal_error)?;

        match updated {
            Some(document) => Ok(Json(document.into())),
            None => Err(ClockInApiError::not_found()),
        }
    }

    /// Delete a clock-in record
    ///
    /// Rejects malformed identifiers with a 400 before any lookup; a
    /// well-formed identifier with no matching record yields a 404.
    #[oai(
        path = "/clock-in/:clock_in_id",
        method = "delete",
        tag = "ApiTags::ClockIns"
    )]
    async fn delete_clock_in(
        &self,
        clock_in_id: Path<String>,
    ) -> Result<Json<DeleteConfirmation>, ClockInApiError> {
        let id = parse_object_id(&clock_in_id.0).map_err(ClockInApiError::from_internal_error)?;

        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(ClockInApiError::from_internal_error)?;

        if deleted {
            Ok(Json(DeleteConfirmation::deleted()))
        } else {
            Err(ClockInApiError::not_found())
        }
    }
}
