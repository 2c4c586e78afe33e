//! Typed shapes for everything sent to or read from the blog collection.
//!
//! Filters and update modifiers are structs rather than ad-hoc documents so
//! field names are checked once, here, by serde.

use bson::oid::ObjectId;
use bson::Document;
use serde::{Deserialize, Serialize};

/// A blog as persisted in the collection.
///
/// `id` is `None` before insertion; the store assigns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub author_id: String,
    pub content: String,
    pub title: String,
}

/// The mutable fields of a blog. Used as the full-replacement payload of
/// an update: every field is written, empty or not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFields {
    pub author_id: String,
    pub content: String,
    pub title: String,
}

/// Filter matching a single blog by `_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdFilter {
    #[serde(rename = "_id")]
    pub id: ObjectId,
}

impl IdFilter {
    pub fn new(id: ObjectId) -> Self {
        Self { id }
    }
}

/// `$set` update modifier.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SetFields<'a> {
    #[serde(rename = "$set")]
    pub set: &'a BlogFields,
}

impl<'a> SetFields<'a> {
    pub fn new(fields: &'a BlogFields) -> Self {
        Self { set: fields }
    }
}

/// Serialize a typed shape into a BSON document.
pub fn encode<T: Serialize>(value: &T) -> Result<Document, bson::ser::Error> {
    bson::to_document(value)
}
