use crate::errors::internal::InternalError;
use mongodb::bson::oid::ObjectId;

/// Parse a client-supplied identifier into an ObjectId
///
/// Every path parameter naming a record goes through this before any store
/// lookup, so malformed identifiers are rejected uniformly with a 400.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, InternalError> {
    ObjectId::parse_str(raw).map_err(|_| InternalError::malformed_id(raw))
}
