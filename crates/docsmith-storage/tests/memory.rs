use docsmith_core::models::document::DocumentType;
use docsmith_core::models::record::{DocumentPatch, NewDocument};
use docsmith_storage::error::StorageError;
use docsmith_storage::memory::MemoryStore;
use docsmith_storage::repository::DocumentStore;

fn new_doc(title: &str) -> NewDocument {
    NewDocument {
        title: title.to_string(),
        content: format!("{title} body"),
        doc_type: DocumentType::Essay,
        metadata: serde_json::json!({ "format": "pdf" }),
    }
}

#[tokio::test]
async fn insert_then_get() {
    let store = MemoryStore::new();
    let stored = store.insert(new_doc("First")).await.unwrap();
    assert_eq!(stored.created_at, stored.updated_at);

    let fetched = store.get(stored.id).await.unwrap();
    assert_eq!(fetched.title, "First");
    assert_eq!(fetched.metadata["format"], "pdf");
}

#[tokio::test]
async fn list_is_newest_first() {
    let store = MemoryStore::new();
    let a = store.insert(new_doc("A")).await.unwrap();
    let b = store.insert(new_doc("B")).await.unwrap();

    let titles: Vec<String> = store.list().await.unwrap().into_iter().map(|d| d.title).collect();
    assert_eq!(titles, ["B", "A"]);

    store
        .update(
            a.id,
            DocumentPatch {
                content: Some("edited".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed[0].id, a.id);
    assert_eq!(listed[0].content, "edited");
    assert_eq!(listed[1].id, b.id);
}

#[tokio::test]
async fn patch_leaves_other_fields_alone() {
    let store = MemoryStore::new();
    let doc = store.insert(new_doc("Keep")).await.unwrap();
    let updated = store
        .update(
            doc.id,
            DocumentPatch {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, "Keep body");
    assert_eq!(updated.created_at, doc.created_at);
    assert!(updated.updated_at >= doc.updated_at);
}

#[tokio::test]
async fn delete_removes_row() {
    let store = MemoryStore::new();
    let doc = store.insert(new_doc("Gone")).await.unwrap();
    store.delete(doc.id).await.unwrap();

    assert!(store.is_empty().await);
    assert!(matches!(
        store.get(doc.id).await,
        Err(StorageError::DocumentNotFound { id }) if id == doc.id
    ));
    assert!(matches!(
        store.delete(doc.id).await,
        Err(StorageError::DocumentNotFound { .. })
    ));
}

#[tokio::test]
async fn clones_share_rows() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.insert(new_doc("Shared")).await.unwrap();
    assert_eq!(other.len().await, 1);
}

#[tokio::test]
async fn update_of_missing_row_fails() {
    let store = MemoryStore::new();
    let id = uuid::Uuid::new_v4();
    assert!(matches!(
        store.update(id, DocumentPatch::default()).await,
        Err(StorageError::DocumentNotFound { .. })
    ));
}
