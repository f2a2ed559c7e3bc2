use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::document::DocumentType;

/// A row of the "documents" collection.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredDocument {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Original generation parameters and the export format.
    pub metadata: serde_json::Value,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Insert payload: a row without its id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub metadata: serde_json::Value,
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl StoredDocument {
    pub fn create(new: NewDocument, now: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            doc_type: new.doc_type,
            metadata: new.metadata,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: DocumentPatch, now: jiff::Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(metadata) = patch.metadata {
            self.metadata = metadata;
        }
        self.updated_at = now;
    }
}
