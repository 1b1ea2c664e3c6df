use std::sync::Arc;

use chrono::NaiveDate;
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::helpers::parse_object_id;
use crate::errors::ItemApiError;
use crate::stores::{ItemFilter, ItemStore};
use crate::types::dto::common::DeleteConfirmation;
use crate::types::dto::items::{CreateItemRequest, EmailCount, ItemResponse, UpdateItemRequest};
use crate::AppData;

/// Items API endpoints
pub struct ItemsApi {
    store: Arc<ItemStore>,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            store: Arc::clone(&app_data.item_store),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// `insert_date` is assigned by the server; `expiry_date` is stored
    /// normalized to midnight UTC of the given day.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemApiError> {
        let created = self
            .store
            .create(&body.0)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        match created {
            Some(document) => Ok(Json(document.into())),
            None => Err(ItemApiError::not_found()),
        }
    }

    /// Filter items
    ///
    /// All supplied filters are combined with AND; omitted filters impose no
    /// constraint. `expiry_date` matches items expiring strictly after the
    /// given date; `quantity` matches items with at least the given quantity.
    #[oai(path = "/items/filter/", method = "get", tag = "ApiTags::Items")]
    async fn filter_items(
        &self,
        email: Query<Option<String>>,
        expiry_date: Query<Option<NaiveDate>>,
        quantity: Query<Option<i64>>,
    ) -> Result<Json<Vec<ItemResponse>>, ItemApiError> {
        let filter = ItemFilter {
            email: email.0,
            expiry_after: expiry_date.0,
            min_quantity: quantity.0,
        };

        let items = self
            .store
            .filter(&filter)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }

    /// Count items grouped by email
    #[oai(path = "/items/aggregate/", method = "get", tag = "ApiTags::Items")]
    async fn aggregate_items_by_email(&self) -> Result<Json<Vec<EmailCount>>, ItemApiError> {
        let rows = self
            .store
            .counts_by_email()
            .await
            .map_err(ItemApiError::from_internal_error)?;

        Ok(Json(rows.into_iter().map(EmailCount::from).collect()))
    }

    /// Fetch an item by id
    #[oai(path = "/items/:item_id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(
        &self,
        item_id: Path<String>,
    ) -> Result<Json<ItemResponse>, ItemApiError> {
        let id = parse_object_id(&item_id.0).map_err(ItemApiError::from_internal_error)?;

        let item = self
            .store
            .find_by_id(id)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        match item {
            Some(document) => Ok(Json(document.into())),
            None => Err(ItemApiError::not_found()),
        }
    }

    /// Update an item
    ///
    /// Only supplied fields overwrite stored values; `insert_date` is never
    /// altered. Returns the full record after the update is applied.
    #[oai(path = "/items/:item_id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        item_id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemApiError> {
        let id = parse_object_id(&item_id.0).map_err(ItemApiError::from_internal_error)?;

        let updated = self
            .store
            .update(id, &body.0)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        match updated {
            Some(document) => Ok(Json(document.into())),
            None => Err(ItemApiError::not_found()),
        }
    }

    /// Delete an item
    #[oai(path = "/items/:item_id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(
        &self,
        item_id: Path<String>,
    ) -> Result<Json<DeleteConfirmation>, ItemApiError> {
        let id = parse_object_id(&item_id.0).map_err(ItemApiError::from_internal_error)?;

        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        if deleted {
            Ok(Json(DeleteConfirmation::deleted()))
        } else {
            Err(ItemApiError::not_found())
        }
    }
}
