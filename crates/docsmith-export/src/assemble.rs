//! Content Assembler: structured request → intermediate document text.
//!
//! Two targets are produced from the same request:
//! - plain text (title line, blank line, body), consumed by the PDF renderer;
//! - a [`MarkupDocument`] (title + one paragraph per body line), consumed by
//!   the DOCX renderer.
//!
//! Neither path fails. Empty content yields a title-only document.

use docsmith_core::models::document::{DocumentContent, DocumentRequest};
use docsmith_core::models::resume::{ResumeData, Section};

pub const SUMMARY_HEADER: &str = "PROFESSIONAL SUMMARY";
pub const EXPERIENCE_HEADER: &str = "PROFESSIONAL EXPERIENCE";
pub const EDUCATION_HEADER: &str = "EDUCATION";
pub const SKILLS_HEADER: &str = "SKILLS";

/// Title plus body as a single string: the title on its own first line,
/// then a blank line, then the body (omitted when empty).
pub fn assemble_plain_text(request: &DocumentRequest) -> String {
    let title = single_line(request.effective_title());
    let body = body_text(request);
    if body.is_empty() {
        title
    } else {
        format!("{title}\n\n{body}")
    }
}

/// The body of a request without its title. Text bodies are kept line for
/// line, whitespace-only lines included.
pub fn body_text(request: &DocumentRequest) -> String {
    match &request.content {
        DocumentContent::Text(text) => normalize_newlines(text),
        DocumentContent::Resume(data) => format_resume(data),
    }
}

/// Format a resume as plain text.
///
/// Sections always appear in this order: contact header, summary,
/// experience, education, skills. They are separated by a blank line,
/// and so are the entries of the experience and education sections.
pub fn format_resume(data: &ResumeData) -> String {
    resume_sections(data)
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The resume as labelled sections, in display order.
///
/// The contact header is labelled with the person's name; every other
/// section with its upper-case header. A section with nothing to show keeps
/// its label and has no lines.
pub fn resume_sections(data: &ResumeData) -> Vec<Section> {
    let info = &data.personal_info;

    let mut header = Section::new(info.full_name.trim());
    let contact = info.contact_entries();
    if !contact.is_empty() {
        header.lines.push(contact.join(" | "));
    }

    let mut summary = Section::new(SUMMARY_HEADER);
    push_nonblank(&mut summary.lines, &data.summary);

    let mut experience = Section::new(EXPERIENCE_HEADER);
    experience.lines = join_entries(data.experience.iter().map(|exp| {
        let mut entry = vec![
            exp.position.clone(),
            format!("{}, {}", exp.company, exp.location),
            exp.date_range(),
        ];
        push_nonblank(&mut entry, &exp.description);
        entry
    }));

    let mut education = Section::new(EDUCATION_HEADER);
    education.lines = join_entries(data.education.iter().map(|edu| {
        let mut entry = vec![
            edu.institution.clone(),
            format!("{} in {}", edu.degree, edu.field_of_study),
            edu.date_range(),
        ];
        if let Some(description) = &edu.description {
            push_nonblank(&mut entry, description);
        }
        entry
    }));

    let mut skills = Section::new(SKILLS_HEADER);
    let names: Vec<&str> = data
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    if !names.is_empty() {
        skills.lines.push(names.join(", "));
    }

    vec![header, summary, experience, education, skills]
}

fn render_section(section: &Section) -> String {
    let mut out = section.label.clone();
    for line in &section.lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

/// Flatten entries into lines, with an empty line between entries.
fn join_entries(entries: impl Iterator<Item = Vec<String>>) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in entries.enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(entry);
    }
    lines
}

fn push_nonblank(entry: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        entry.push(normalize_newlines(text));
    }
}

/// Minimal structured document for the DOCX path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDocument {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Title heading plus exactly one paragraph per `\n`-delimited body line.
///
/// Blank lines become empty paragraphs; no line is merged or split and no
/// inline formatting is inferred.
pub fn assemble_markup(request: &DocumentRequest) -> MarkupDocument {
    let body = body_text(request);
    let paragraphs = if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').map(str::to_string).collect()
    };

    MarkupDocument {
        title: single_line(request.effective_title()),
        paragraphs,
    }
}

impl MarkupDocument {
    /// Simple HTML rendition: an `<h1>` and one `<p>` per paragraph.
    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = format!(
            "<html><head><meta charset=\"utf-8\"><title>{title}</title></head><body><h1>{title}</h1>"
        );
        for para in &self.paragraphs {
            html.push_str("<p>");
            html.push_str(&escape_html(para));
            html.push_str("</p>");
        }
        html.push_str("</body></html>");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Titles occupy exactly one line of the intermediate text.
fn single_line(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}
