//! Conversion helpers between client-facing JSON and store-native BSON.
//!
//! Entities carry arbitrary client-supplied fields, so they move through the
//! system as raw documents rather than fixed structs.

use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};

/// Parse a client-supplied identifier string into a store-native `ObjectId`.
///
/// A malformed string yields `AppError::InvalidIdentifier`, which surfaces
/// as 404 while staying distinguishable from a genuinely absent entity.
pub fn parse_object_id(id: &str, entity: &'static str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| {
        tracing::debug!(id, entity, "malformed identifier treated as not found");
        AppError::InvalidIdentifier { entity }
    })
}

/// Convert a validated JSON object into a BSON document for insertion.
pub fn to_document(fields: &Map<String, Value>) -> Result<Document> {
    Ok(bson::to_document(fields)?)
}

/// Convert a stored document into its client-facing JSON form, with the
/// store-native `_id` replaced by its string encoding.
pub fn to_json(mut doc: Document) -> Value {
    if let Some(id) = doc.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
            other => other,
        };
        doc.insert("_id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

/// Extract the merge-update document from a PUT request body.
///
/// An absent, null, or empty-object body counts as "Missing request body";
/// a present body that is not an object is rejected as malformed.
pub fn update_document(body: Option<&Value>) -> Result<Document> {
    let Some(body) = body else {
        return Err(AppError::validation("Missing request body"));
    };

    let Some(fields) = body.as_object() else {
        if body.is_null() {
            return Err(AppError::validation("Missing request body"));
        }
        return Err(AppError::validation(
            "Invalid request data format (expected a dictionary)",
        ));
    };

    if fields.is_empty() {
        return Err(AppError::validation("Missing request body"));
    }

    to_document(fields)
}
