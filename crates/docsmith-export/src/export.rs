use docsmith_core::models::artifact::RenderedArtifact;
use docsmith_core::models::document::{DocumentRequest, ExportFormat};
use tracing::info;

use crate::assemble::{assemble_markup, assemble_plain_text};
use crate::error::ExportError;
use crate::filename::suggested_filename;
use crate::styles::DocumentStyles;
use crate::{docx, pdf};

/// Render the request in its target format.
pub fn render(request: &DocumentRequest, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    match request.format {
        ExportFormat::Pdf => pdf::generate_pdf(&assemble_plain_text(request), styles),
        ExportFormat::Docx => docx::generate_docx(&assemble_markup(request), styles),
    }
}

/// Assemble, render, and name an artifact for `request`, dated `date`.
pub fn produce_artifact(
    request: &DocumentRequest,
    date: jiff::civil::Date,
    styles: &DocumentStyles,
) -> Result<RenderedArtifact, ExportError> {
    let bytes = render(request, styles)?;
    let suggested_filename = suggested_filename(request.effective_title(), date, request.format);

    info!(
        doc_type = %request.doc_type,
        format = %request.format,
        filename = %suggested_filename,
        bytes = bytes.len(),
        "artifact rendered"
    );

    Ok(RenderedArtifact {
        bytes,
        suggested_filename,
        format: request.format,
    })
}
