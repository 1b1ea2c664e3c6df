use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::types::dto::clock_in::CreateClockInRequest;

/// Clock-in document as stored in the "clock-ins" collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockInDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub location: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub insert_datetime: DateTime<Utc>,
}

impl ClockInDocument {
    pub fn from_create(request: &CreateClockInRequest, insert_datetime: DateTime<Utc>) -> Self {
        Self {
            id: None,
            email: request.email.0.clone(),
            location: request.location.clone(),
            insert_datetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::Email;

    #[test]
    fn test_from_create_sets_insert_datetime() {
        let request = CreateClockInRequest {
            email: Email("a@x.com".to_string()),
            location: "warehouse-3".to_string(),
        };
        let now = Utc::now();

        let document = ClockInDocument::from_create(&request, now);

        assert!(document.id.is_none());
        assert_eq!(document.email, "a@x.com");
        assert_eq!(document.location, "warehouse-3");
        assert_eq!(document.insert_datetime, now);
    }
}
