use aws_sdk_s3::Client;
use tracing::{debug, info};
use uuid::Uuid;

use docsmith_core::models::record::{DocumentPatch, NewDocument, StoredDocument};
use docsmith_core::storage_keys;

use crate::error::StorageError;
use crate::repository::{DocumentStore, sort_newest_first};
use crate::state;

/// Documents stored as one JSON object each under `documents/`.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn save(&self, doc: &StoredDocument) -> Result<(), StorageError> {
        state::save_json(&self.client, &self.bucket, &storage_keys::document(doc.id), doc).await
    }
}

impl DocumentStore for S3Store {
    async fn insert(&self, doc: NewDocument) -> Result<StoredDocument, StorageError> {
        let stored = StoredDocument::create(doc, jiff::Timestamp::now());
        self.save(&stored).await?;
        info!(id = %stored.id, bucket = %self.bucket, "document inserted");
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<StoredDocument, StorageError> {
        state::load_json(&self.client, &self.bucket, &storage_keys::document(id))
            .await?
            .ok_or(StorageError::DocumentNotFound { id })
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StorageError> {
        let keys = crate::objects::list_keys(
            &self.client,
            &self.bucket,
            storage_keys::DOCUMENTS_PREFIX,
        )
        .await?;

        let mut docs = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| storage_keys::document_id(k).is_some()) {
            // A row deleted between list and load is skipped.
            if let Some(doc) = state::load_json::<StoredDocument>(&self.client, &self.bucket, key).await? {
                docs.push(doc);
            }
        }
        sort_newest_first(&mut docs);
        debug!(count = docs.len(), "documents listed");
        Ok(docs)
    }

    async fn update(&self, id: Uuid, patch: DocumentPatch) -> Result<StoredDocument, StorageError> {
        let mut doc = self.get(id).await?;
        doc.apply(patch, jiff::Timestamp::now());
        self.save(&doc).await?;
        info!(id = %id, "document updated");
        Ok(doc)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        // Existence check keeps NotFound semantics; S3 deletes are idempotent.
        self.get(id).await?;
        crate::objects::delete_object(&self.client, &self.bucket, &storage_keys::document(id)).await?;
        info!(id = %id, "document deleted");
        Ok(())
    }
}
