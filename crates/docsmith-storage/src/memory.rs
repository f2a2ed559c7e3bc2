use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use docsmith_core::models::record::{DocumentPatch, NewDocument, StoredDocument};

use crate::error::StorageError;
use crate::repository::DocumentStore;

/// Session-scoped document store. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Rows>>,
}

#[derive(Debug, Default)]
struct Rows {
    /// Bumped on every write; breaks `updated_at` ties so the most recent
    /// write still lists first.
    seq: u64,
    docs: HashMap<Uuid, (u64, StoredDocument)>,
}

impl Rows {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.docs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.docs.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    async fn insert(&self, doc: NewDocument) -> Result<StoredDocument, StorageError> {
        let stored = StoredDocument::create(doc, jiff::Timestamp::now());
        let mut rows = self.inner.write().await;
        let seq = rows.next_seq();
        rows.docs.insert(stored.id, (seq, stored.clone()));
        debug!(id = %stored.id, "document inserted");
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<StoredDocument, StorageError> {
        self.inner
            .read()
            .await
            .docs
            .get(&id)
            .map(|(_, doc)| doc.clone())
            .ok_or(StorageError::DocumentNotFound { id })
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StorageError> {
        let rows = self.inner.read().await;
        let mut entries: Vec<&(u64, StoredDocument)> = rows.docs.values().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.updated_at.cmp(&a.updated_at).then(seq_b.cmp(seq_a))
        });
        Ok(entries.into_iter().map(|(_, doc)| doc.clone()).collect())
    }

    async fn update(&self, id: Uuid, patch: DocumentPatch) -> Result<StoredDocument, StorageError> {
        let mut rows = self.inner.write().await;
        let seq = rows.next_seq();
        let (entry_seq, doc) = rows
            .docs
            .get_mut(&id)
            .ok_or(StorageError::DocumentNotFound { id })?;
        *entry_seq = seq;
        doc.apply(patch, jiff::Timestamp::now());
        debug!(id = %id, "document updated");
        Ok(doc.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        if self.inner.write().await.docs.remove(&id).is_none() {
            return Err(StorageError::DocumentNotFound { id });
        }
        debug!(id = %id, "document deleted");
        Ok(())
    }
}
