use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use tracing::{debug, error};

use crate::error::ExportError;
use crate::metrics::{self, MM_PER_PT};
use crate::styles::{DocumentStyles, PageGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Body,
}

/// One line of text placed on a page. Coordinates are millimetres from
/// the top-left corner; `y_mm` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct PdfLayout {
    pub geometry: PageGeometry,
    pub page_count: usize,
    pub lines: Vec<PlacedLine>,
}

/// Lay out assembled plain text.
///
/// The first line of `text` is the title; a single blank separator line
/// after it is dropped, and the rest is the body. The title is set at
/// `styles.title_size`, the body at `styles.body_size`, and both wrap to
/// the content width.
pub fn layout_pdf(text: &str, styles: &DocumentStyles) -> PdfLayout {
    let geometry = styles.page;
    let (title, body) = split_title(text);

    let title_size = styles.title_size as f32;
    let body_size = styles.body_size as f32;
    let title_step = title_size * MM_PER_PT * geometry.line_height;
    let body_step = body_size * MM_PER_PT * geometry.line_height;
    let bottom = geometry.height_mm - geometry.bottom_mm;

    let mut lines = Vec::new();
    let mut page = 0;
    let mut y = geometry.title_top_mm;

    for text in wrap_text(title, title_size, geometry.content_width_mm) {
        lines.push(PlacedLine {
            page,
            x_mm: geometry.left_mm,
            y_mm: y,
            size_pt: title_size,
            kind: LineKind::Title,
            text,
        });
        y += title_step;
    }

    y = geometry.body_top_mm.max(y - title_step + body_step);
    for text in wrap_text(body, body_size, geometry.content_width_mm) {
        if y > bottom {
            page += 1;
            y = geometry.title_top_mm;
        }
        lines.push(PlacedLine {
            page,
            x_mm: geometry.left_mm,
            y_mm: y,
            size_pt: body_size,
            kind: LineKind::Body,
            text,
        });
        y += body_step;
    }

    PdfLayout {
        geometry,
        page_count: page + 1,
        lines,
    }
}

fn split_title(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((title, rest)) => (title, rest.strip_prefix('\n').unwrap_or(rest)),
        None => (text, ""),
    }
}

/// Wrap text to `width_mm` at `size_pt`.
///
/// Newlines are hard breaks and blank lines are kept. Words wrap greedily;
/// a word wider than the whole line is broken between characters. Empty
/// input yields no lines.
pub fn wrap_text(text: &str, size_pt: f32, width_mm: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let fits = |s: &str| metrics::text_width_mm(s, size_pt) <= width_mm;
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_string();
                continue;
            }
            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    out.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
        out.push(current);
    }

    out
}

/// Generate a PDF from assembled plain text.
pub fn generate_pdf(text: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let layout = layout_pdf(text, styles);
    let title = layout
        .lines
        .iter()
        .find(|l| l.kind == LineKind::Title)
        .map(|l| l.text.clone())
        .unwrap_or_default();

    encode_pdf(&layout, &title).map_err(|e| {
        error!(error = %e, "PDF encoding failed");
        e
    })
}

fn encode_pdf(layout: &PdfLayout, title: &str) -> Result<Vec<u8>, ExportError> {
    let geometry = layout.geometry;
    let page_width = geometry.width_mm / MM_PER_PT;
    let page_height = geometry.height_mm / MM_PER_PT;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(layout.page_count);
    for page in 0..layout.page_count {
        let mut operations = Vec::new();
        for line in layout.lines.iter().filter(|l| l.page == page) {
            if line.text.is_empty() {
                continue;
            }
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), Object::from(line.size_pt)]));
            operations.push(Operation::new(
                "Td",
                vec![
                    Object::from(line.x_mm / MM_PER_PT),
                    Object::from(page_height - line.y_mm / MM_PER_PT),
                ],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(metrics::encode_win_ansi(&line.text))],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        "Count" => layout.page_count as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::from(page_width),
            Object::from(page_height),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(text_string(title)),
        "Producer" => Object::string_literal("docsmith"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    debug!(pages = layout.page_count, bytes = buf.len(), "PDF encoded");
    Ok(buf)
}

/// PDF text string for document metadata: UTF-16BE with a byte order mark.
fn text_string(text: &str) -> Vec<u8> {
    let mut out = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}
