//! Storage key/path conventions.
//!
//! Pure string functions. These define the canonical layout of objects
//! in the documents bucket.

use uuid::Uuid;

pub const DOCUMENTS_PREFIX: &str = "documents/";

pub fn document(id: Uuid) -> String {
    format!("{DOCUMENTS_PREFIX}{id}.json")
}

/// Recover the document id from a key produced by [`document`].
pub fn document_id(key: &str) -> Option<Uuid> {
    key.strip_prefix(DOCUMENTS_PREFIX)?
        .strip_suffix(".json")?
        .parse()
        .ok()
}
