//! Sequences generation, rendering, delivery, and persistence for a single
//! request.
//!
//! Each step runs only if the previous one succeeded, and the first failure
//! is returned as-is. Nothing is rolled back: if saving the record fails,
//! the artifact has already been delivered and stays where it landed.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docsmith_core::models::document::{DocumentContent, DocumentRequest, ExportFormat};
use docsmith_core::models::params::GenerationParams;
use docsmith_core::models::record::{NewDocument, StoredDocument};
use docsmith_export::deliver::{ArtifactSink, Delivery};
use docsmith_export::export::produce_artifact;
use docsmith_export::filename;
use docsmith_export::styles::DocumentStyles;
use docsmith_generate::error::GenerateError;
use docsmith_generate::generator::ContentGenerator;
use docsmith_storage::repository::DocumentStore;

use crate::error::PipelineError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub params: GenerationParams,
    pub format: ExportFormat,
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub content: String,
    pub delivery: Delivery,
    pub record: StoredDocument,
}

impl GenerationOutcome {
    pub fn filename(&self) -> &str {
        &self.delivery.filename
    }
}

pub struct Orchestrator<G, S, D> {
    generator: G,
    store: S,
    sink: D,
    styles: DocumentStyles,
    date: Option<jiff::civil::Date>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when dropped, whichever way `generate` exits.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<G, S, D> Orchestrator<G, S, D>
where
    G: ContentGenerator,
    S: DocumentStore,
    D: ArtifactSink,
{
    pub fn new(generator: G, store: S, sink: D, styles: DocumentStyles) -> Self {
        Self {
            generator,
            store,
            sink,
            styles,
            date: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Pin the date used in filenames. Defaults to today.
    pub fn with_date(mut self, date: jiff::civil::Date) -> Self {
        self.date = Some(date);
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Generate, render, deliver, and record a document.
    ///
    /// Rejects the call with [`PipelineError::Busy`] while another `generate`
    /// on this orchestrator is still running. There is no retry: calling
    /// again after a failure repeats every step, generation included.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, PipelineError> {
        let _guard = InFlight::acquire(&self.in_flight).ok_or(PipelineError::Busy)?;

        let GenerationRequest { params, format } = request;
        params
            .validate()
            .map_err(|e| PipelineError::InvalidParams(e.to_string()))?;

        let doc_type = params.doc_type();
        info!(doc_type = %doc_type, format = %format, "generating document");

        let generated = self
            .generator
            .generate(&params)
            .await
            .map_err(generation_error)?;

        let title = params.title().unwrap_or_default();
        let document = DocumentRequest::new(
            title,
            doc_type,
            format,
            DocumentContent::Text(generated.content.clone()),
        );
        let delivery = self.render_and_deliver(&document)?;

        let metadata = serde_json::json!({
            "originalData": params.body().map_err(|e| PipelineError::Persist(e.to_string()))?,
            "format": format,
        });
        let new = NewDocument {
            title: document.title.clone(),
            content: generated.content.clone(),
            doc_type,
            metadata,
        };

        let record = match self.store.insert(new).await {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    filename = %delivery.filename,
                    error = %e,
                    "document delivered but not saved"
                );
                return Err(PipelineError::Persist(e.to_string()));
            }
        };

        info!(id = %record.id, filename = %delivery.filename, "document generated");
        Ok(GenerationOutcome {
            content: generated.content,
            delivery,
            record,
        })
    }

    /// Render and deliver an already-written document. Nothing is saved.
    pub fn export(&self, request: &DocumentRequest) -> Result<Delivery, PipelineError> {
        self.render_and_deliver(request)
    }

    fn render_and_deliver(&self, request: &DocumentRequest) -> Result<Delivery, PipelineError> {
        let date = self.date.unwrap_or_else(filename::today);
        let artifact = produce_artifact(request, date, &self.styles)
            .map_err(|e| PipelineError::Render(e.to_string()))?;
        self.sink
            .deliver(artifact)
            .map_err(|e| PipelineError::Delivery(e.to_string()))
    }
}

fn generation_error(e: GenerateError) -> PipelineError {
    match e {
        GenerateError::InvalidParams(e) => PipelineError::InvalidParams(e.to_string()),
        other => PipelineError::Generation(other.to_string()),
    }
}
