//! Request building and output formatting for the CLI subcommands.

use std::path::Path;

use docsmith_core::models::document::{
    DocumentContent, DocumentRequest, DocumentType, ExportFormat,
};
use docsmith_core::models::record::StoredDocument;
use docsmith_core::models::resume::ResumeData;
use docsmith_export::deliver::Delivery;
use docsmith_pipeline::orchestrator::GenerationOutcome;
use docsmith_storage::repository::DocumentStore;

use crate::backends::Store;

pub fn load_resume(path: &Path) -> eyre::Result<ResumeData> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read resume at {}: {e}", path.display()))?;
    let data = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid resume JSON in {}: {e}", path.display()))?;
    Ok(data)
}

/// Build an export request from a file: resume JSON for resumes, plain
/// text for everything else.
pub fn export_request(
    input: &Path,
    title: Option<String>,
    doc_type: DocumentType,
    format: ExportFormat,
) -> eyre::Result<DocumentRequest> {
    let (fallback_title, content) = match doc_type {
        DocumentType::Resume => {
            let data = load_resume(input)?;
            (data.title.clone(), DocumentContent::Resume(data))
        }
        _ => {
            let text = std::fs::read_to_string(input)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", input.display()))?;
            (None, DocumentContent::Text(text))
        }
    };

    let title = title.or(fallback_title).unwrap_or_default();
    Ok(DocumentRequest::new(title, doc_type, format, content))
}

pub fn describe_delivery(delivery: &Delivery) -> String {
    match &delivery.path {
        Some(path) => format!("Saved {} ({} bytes)", path.display(), delivery.bytes),
        None => format!("Delivered {} ({} bytes)", delivery.filename, delivery.bytes),
    }
}

pub fn describe_outcome(outcome: &GenerationOutcome) -> String {
    format!(
        "{}\nRecorded as {}",
        describe_delivery(&outcome.delivery),
        outcome.record.id
    )
}

/// Saved documents, newest first. Memory storage keeps nothing between
/// runs, so asking it for history is an error.
pub async fn history(store: &Store) -> eyre::Result<Vec<StoredDocument>> {
    if let Store::Memory(_) = store {
        return Err(eyre::eyre!(
            "history needs persistent storage; the configured storage is \"memory\" \
             (set storage to \"local\" or \"s3\" in the config file)"
        ));
    }
    Ok(store.list().await?)
}

pub fn history_line(doc: &StoredDocument) -> String {
    format!(
        "{}  {:<12}  {}  {}",
        doc.updated_at.strftime("%Y-%m-%d %H:%M"),
        doc.doc_type.as_str(),
        doc.id,
        doc.title
    )
}
