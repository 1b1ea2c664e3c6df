use chrono::{DateTime, Utc};
use poem_openapi::types::Email;
use poem_openapi::Object;

use crate::types::db::ClockInDocument;

/// Request model for creating or replacing a clock-in record
#[derive(Object, Debug, Clone)]
pub struct CreateClockInRequest {
    /// Email address of the person clocking in
    pub email: Email,

    /// Location of the clock-in
    pub location: String,
}

/// Response model representing a stored clock-in record
#[derive(Object, Debug, Clone)]
pub struct ClockInResponse {
    /// Unique identifier for the record
    pub id: String,

    pub email: String,

    pub location: String,

    /// Timestamp when the record was created (ISO 8601, UTC)
    pub insert_datetime: DateTime<Utc>,
}

impl From<ClockInDocument> for ClockInResponse {
    fn from(document: ClockInDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: document.email,
            location: document.location,
            insert_datetime: document.insert_datetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_clock_in_response_exposes_object_id_as_hex_string() {
        let id = ObjectId::new();
        let document = ClockInDocument {
            id: Some(id),
            email: "a@x.com".to_string(),
            location: "warehouse-3".to_string(),
            insert_datetime: Utc::now(),
        };

        let response = ClockInResponse::from(document);

        assert_eq!(response.id, id.to_hex());
        assert_eq!(response.email, "a@x.com");
        assert_eq!(response.location, "warehouse-3");
    }
}
