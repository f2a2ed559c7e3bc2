use docsmith_core::models::document::{DocumentRequest, ExportFormat};
use docsmith_export::assemble::{assemble_markup, assemble_plain_text};
use docsmith_export::docx::generate_docx;
use docsmith_export::metrics::{encode_win_ansi, text_width_mm};
use docsmith_export::pdf::{LineKind, generate_pdf, layout_pdf, wrap_text};
use docsmith_export::styles::DocumentStyles;

#[test]
fn title_is_first_rendered_line() {
    let req = DocumentRequest::essay("Climate Essay", ExportFormat::Pdf, "Para one.\nPara two.");
    let layout = layout_pdf(&assemble_plain_text(&req), &DocumentStyles::default());

    let first = &layout.lines[0];
    assert_eq!(first.text, "Climate Essay");
    assert_eq!(first.kind, LineKind::Title);
    assert_eq!(first.size_pt, 16.0);
    assert_eq!((first.x_mm, first.y_mm), (20.0, 20.0));

    let body: Vec<&str> = layout.lines[1..].iter().map(|l| l.text.as_str()).collect();
    assert_eq!(body, ["Para one.", "Para two."]);
    assert_eq!(layout.lines[1].y_mm, 40.0);
    assert_eq!(layout.lines[1].size_pt, 12.0);
    assert_eq!(layout.page_count, 1);
}

#[test]
fn body_wraps_to_content_width() {
    let paragraph = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let lines = wrap_text(paragraph.trim(), 12.0, 170.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width_mm(line, 12.0) <= 170.0, "too wide: {line}");
    }
    assert_eq!(lines.join(" "), paragraph.trim());
}

#[test]
fn overlong_word_is_broken() {
    let word = "x".repeat(400);
    let lines = wrap_text(&word, 12.0, 170.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), word);
}

#[test]
fn blank_lines_are_preserved() {
    assert_eq!(wrap_text("a\n\nb", 12.0, 170.0), ["a", "", "b"]);
    assert!(wrap_text("", 12.0, 170.0).is_empty());
}

#[test]
fn long_bodies_continue_on_new_pages() {
    let body = (0..200).map(|i| format!("Line {i}")).collect::<Vec<_>>().join("\n");
    let req = DocumentRequest::essay("Long", ExportFormat::Pdf, body);
    let styles = DocumentStyles::default();
    let layout = layout_pdf(&assemble_plain_text(&req), &styles);
    assert!(layout.page_count > 1);

    let bottom = styles.page.height_mm - styles.page.bottom_mm;
    assert!(layout.lines.iter().all(|l| l.y_mm <= bottom));

    let bytes = generate_pdf(&assemble_plain_text(&req), &styles).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), layout.page_count);
}

#[test]
fn pdf_bytes_are_a_pdf() {
    let req = DocumentRequest::essay("Climate Essay", ExportFormat::Pdf, "Para one.\nPara two.");
    let bytes = generate_pdf(&assemble_plain_text(&req), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn non_latin_text_is_replaced_not_rejected() {
    assert_eq!(encode_win_ansi("caf\u{e9} \u{2014} \u{4e2d}"), b"caf\xe9 \x97 ?");
    let req = DocumentRequest::essay("\u{4e2d}\u{6587}", ExportFormat::Pdf, "(parens) \\ backslash");
    assert!(generate_pdf(&assemble_plain_text(&req), &DocumentStyles::default()).is_ok());
}

#[test]
fn docx_bytes_are_a_zip_container() {
    let req = DocumentRequest::essay("Climate Essay", ExportFormat::Docx, "Para one.\nPara two.");
    let bytes = generate_docx(&assemble_markup(&req), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn margins_are_one_inch_in_twips() {
    assert_eq!(DocumentStyles::default().margin_twips(), 1440);
}

#[test]
fn docx_has_title_plus_one_paragraph_per_line() {
    let req = DocumentRequest::essay("Notes", ExportFormat::Docx, "a\n\nb\nc");
    let bytes = generate_docx(&assemble_markup(&req), &DocumentStyles::default()).unwrap();
    let docx = docx_rs::read_docx(&bytes).unwrap();

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter(|c| matches!(c, docx_rs::DocumentChild::Paragraph(_)))
        .count();
    assert_eq!(paragraphs, 1 + 4);

    let margin = &docx.document.section_property.page_margin;
    assert_eq!(
        (margin.top, margin.right, margin.bottom, margin.left),
        (1440, 1440, 1440, 1440)
    );
}

#[test]
fn pdf_title_metadata_is_utf16() {
    let req = DocumentRequest::essay("Caf\u{e9} \u{2014} Notes", ExportFormat::Pdf, "body");
    let bytes = generate_pdf(&assemble_plain_text(&req), &DocumentStyles::default()).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();

    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let title = doc.get_dictionary(info_id).unwrap().get(b"Title").unwrap().as_str().unwrap();

    let mut expected = vec![0xFE, 0xFF];
    for unit in "Caf\u{e9} \u{2014} Notes".encode_utf16() {
        expected.extend_from_slice(&unit.to_be_bytes());
    }
    assert_eq!(title, expected.as_slice());
}
