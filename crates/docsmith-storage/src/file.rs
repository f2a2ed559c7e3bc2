use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use docsmith_core::models::record::{DocumentPatch, NewDocument, StoredDocument};
use docsmith_core::storage_keys;

use crate::error::StorageError;
use crate::repository::{DocumentStore, sort_newest_first};

/// Documents stored as JSON files under `{root}/documents/`, with the same
/// key layout as the S3 store. Rows survive across processes.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, id: Uuid) -> PathBuf {
        self.root.join(storage_keys::document(id))
    }

    async fn load(&self, path: &Path) -> Result<Option<StoredDocument>, StorageError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, doc: &StoredDocument) -> Result<(), StorageError> {
        let path = self.path(doc.id);
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        // Written beside the target, then renamed over it.
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, serde_json::to_vec_pretty(doc)?).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}

impl DocumentStore for FileStore {
    async fn insert(&self, doc: NewDocument) -> Result<StoredDocument, StorageError> {
        let stored = StoredDocument::create(doc, jiff::Timestamp::now());
        self.save(&stored).await?;
        info!(id = %stored.id, root = %self.root.display(), "document inserted");
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<StoredDocument, StorageError> {
        self.load(&self.path(id))
            .await?
            .ok_or(StorageError::DocumentNotFound { id })
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StorageError> {
        let dir = self.root.join(storage_keys::DOCUMENTS_PREFIX);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut docs = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let key = format!(
                "{}{}",
                storage_keys::DOCUMENTS_PREFIX,
                entry.file_name().to_string_lossy()
            );
            if storage_keys::document_id(&key).is_none() {
                continue;
            }
            // A row deleted between listing and loading is skipped.
            if let Some(doc) = self.load(&entry.path()).await? {
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
        match tokio::fs::remove_file(self.path(id)).await {
            Ok(()) => {
                info!(id = %id, "document deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::DocumentNotFound { id }),
            Err(e) => Err(e.into()),
        }
    }
}
