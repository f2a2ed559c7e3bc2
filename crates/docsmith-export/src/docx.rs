use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::{debug, error};

use crate::assemble::MarkupDocument;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from assembled markup.
///
/// The title becomes a Heading 1 paragraph; every markup paragraph becomes
/// exactly one body paragraph (empty ones included). Margins are uniform.
pub fn generate_docx(doc: &MarkupDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .right(margin)
                .bottom(margin)
                .left(margin),
        )
        .add_style(heading_style("Heading1", "heading 1", styles.title_size));

    docx = docx.add_paragraph(title_paragraph(&doc.title, styles));

    for para in &doc.paragraphs {
        docx = docx.add_paragraph(body_paragraph(para, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).map_err(|e| {
        error!(error = %e, "DOCX packing failed");
        ExportError::Docx(e.to_string())
    })?;

    let bytes = buf.into_inner();
    debug!(paragraphs = doc.paragraphs.len(), bytes = bytes.len(), "DOCX packed");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn title_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style("Heading1").add_run(
        Run::new()
            .add_text(text)
            .size(styles.title_size * 2)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let para = Paragraph::new().align(AlignmentType::Left);
    if text.is_empty() {
        return para;
    }
    para.add_run(
        Run::new()
            .add_text(text)
            .size(styles.body_size * 2)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}
