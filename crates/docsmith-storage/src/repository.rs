use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use docsmith_core::models::record::{DocumentPatch, NewDocument, StoredDocument};

use crate::error::StorageError;

/// CRUD access to the "documents" collection.
///
/// `list` returns rows by `updated_at`, newest first. `get`, `update`, and
/// `delete` report a missing id as [`StorageError::DocumentNotFound`].
pub trait DocumentStore: Send + Sync {
    fn insert(
        &self,
        doc: NewDocument,
    ) -> impl Future<Output = Result<StoredDocument, StorageError>> + Send;

    fn get(&self, id: Uuid) -> impl Future<Output = Result<StoredDocument, StorageError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<StoredDocument>, StorageError>> + Send;

    fn update(
        &self,
        id: Uuid,
        patch: DocumentPatch,
    ) -> impl Future<Output = Result<StoredDocument, StorageError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    fn insert(
        &self,
        doc: NewDocument,
    ) -> impl Future<Output = Result<StoredDocument, StorageError>> + Send {
        (**self).insert(doc)
    }

    fn get(&self, id: Uuid) -> impl Future<Output = Result<StoredDocument, StorageError>> + Send {
        (**self).get(id)
    }

    fn list(&self) -> impl Future<Output = Result<Vec<StoredDocument>, StorageError>> + Send {
        (**self).list()
    }

    fn update(
        &self,
        id: Uuid,
        patch: DocumentPatch,
    ) -> impl Future<Output = Result<StoredDocument, StorageError>> + Send {
        (**self).update(id, patch)
    }

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), StorageError>> + Send {
        (**self).delete(id)
    }
}

/// Order rows the way `list` promises: most recently updated first.
pub fn sort_newest_first(docs: &mut [StoredDocument]) {
    docs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
