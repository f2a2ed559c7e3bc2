use docsmith_core::models::document::{
    DocumentContent, DocumentRequest, DocumentType, ExportFormat,
};
use docsmith_core::models::resume::{Education, Experience, PersonalInfo, ResumeData, Skill};
use docsmith_export::assemble::{
    assemble_markup, assemble_plain_text, format_resume, resume_sections,
};

fn sample_resume() -> ResumeData {
    ResumeData {
        title: Some("Ada Lovelace Resume".to_string()),
        personal_info: PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            location: "London".to_string(),
            linkedin: None,
            website: Some("ada.dev".to_string()),
        },
        summary: "Analyst of engines.".to_string(),
        experience: vec![
            Experience {
                company: "Analytical Engines".to_string(),
                position: "Programmer".to_string(),
                location: "London".to_string(),
                start_date: "1842".to_string(),
                end_date: Some("1843".to_string()),
                current: true,
                description: "Wrote the first program.".to_string(),
            },
            Experience {
                company: "Royal Society".to_string(),
                position: "Translator".to_string(),
                location: "London".to_string(),
                start_date: "1840".to_string(),
                end_date: Some("1842".to_string()),
                current: false,
                description: String::new(),
            },
        ],
        education: vec![Education {
            institution: "Home tutoring".to_string(),
            degree: "Private study".to_string(),
            field_of_study: "Mathematics".to_string(),
            start_date: "1830".to_string(),
            end_date: "1835".to_string(),
            description: None,
        }],
        skills: vec![
            Skill { name: "Mathematics".to_string(), level: 5 },
            Skill { name: " ".to_string(), level: 1 },
            Skill { name: "Poetry".to_string(), level: 3 },
        ],
    }
}

#[test]
fn plain_text_starts_with_title_line() {
    let req = DocumentRequest::essay("Climate Essay", ExportFormat::Pdf, "Para one.\nPara two.");
    assert_eq!(
        assemble_plain_text(&req),
        "Climate Essay\n\nPara one.\nPara two."
    );
}

#[test]
fn empty_body_yields_title_only() {
    let req = DocumentRequest::essay("Notes", ExportFormat::Pdf, "");
    assert_eq!(assemble_plain_text(&req), "Notes");
    assert!(assemble_markup(&req).paragraphs.is_empty());
}

#[test]
fn whitespace_lines_are_kept_as_paragraphs() {
    let req = DocumentRequest::essay("Notes", ExportFormat::Docx, " \n \n ");
    assert_eq!(assemble_markup(&req).paragraphs, [" ", " ", " "]);

    let req = DocumentRequest::essay("Notes", ExportFormat::Docx, "\n");
    assert_eq!(assemble_markup(&req).paragraphs, ["", ""]);
    assert_eq!(assemble_plain_text(&req), "Notes\n\n\n");
}

#[test]
fn resume_sections_follow_fixed_order() {
    let text = format_resume(&sample_resume());
    let positions: Vec<usize> = [
        "ada@example.com | London | ada.dev",
        "PROFESSIONAL SUMMARY",
        "PROFESSIONAL EXPERIENCE",
        "EDUCATION",
        "SKILLS",
    ]
    .iter()
    .map(|header| text.find(header).unwrap_or_else(|| panic!("missing {header}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert!(text.starts_with("Ada Lovelace\n"));
}

#[test]
fn resume_section_labels_are_stable() {
    let labels: Vec<String> = resume_sections(&sample_resume())
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(
        labels,
        [
            "Ada Lovelace",
            "PROFESSIONAL SUMMARY",
            "PROFESSIONAL EXPERIENCE",
            "EDUCATION",
            "SKILLS"
        ]
    );
}

#[test]
fn sections_keep_order_even_when_empty() {
    let data = ResumeData {
        personal_info: PersonalInfo {
            full_name: "Nobody".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let text = format_resume(&data);
    assert!(resume_sections(&data).iter().all(|s| s.lines.is_empty()));
    assert_eq!(
        text,
        "Nobody\n\nPROFESSIONAL SUMMARY\n\nPROFESSIONAL EXPERIENCE\n\nEDUCATION\n\nSKILLS"
    );
}

#[test]
fn current_job_ends_with_present() {
    let text = format_resume(&sample_resume());
    assert!(text.contains("Programmer\nAnalytical Engines, London\n1842 - Present\n"));
    assert!(!text.contains("1842 - 1843"));
}

#[test]
fn experience_entries_are_separated_by_blank_line() {
    let text = format_resume(&sample_resume());
    assert!(text.contains("Wrote the first program.\n\nTranslator\nRoyal Society, London\n1840 - 1842"));
}

#[test]
fn education_and_skills_format() {
    let text = format_resume(&sample_resume());
    assert!(text.contains("EDUCATION\nHome tutoring\nPrivate study in Mathematics\n1830 - 1835"));
    assert!(text.ends_with("SKILLS\nMathematics, Poetry"));
}

#[test]
fn markup_has_one_paragraph_per_line() {
    let req = DocumentRequest::essay("Essay", ExportFormat::Docx, "First.\n\nSecond.\nThird.");
    let markup = assemble_markup(&req);
    assert_eq!(markup.title, "Essay");
    assert_eq!(markup.paragraphs, ["First.", "", "Second.", "Third."]);
}

#[test]
fn markup_does_not_interpret_markdown() {
    let req = DocumentRequest::essay("Essay", ExportFormat::Docx, "# Not a heading\n- not a bullet");
    let markup = assemble_markup(&req);
    assert_eq!(markup.paragraphs, ["# Not a heading", "- not a bullet"]);
}

#[test]
fn resume_markup_uses_formatted_text() {
    let req = DocumentRequest::new(
        "",
        DocumentType::Resume,
        ExportFormat::Docx,
        DocumentContent::Resume(sample_resume()),
    );
    let markup = assemble_markup(&req);
    assert_eq!(markup.title, "Untitled Document");
    assert_eq!(markup.paragraphs[0], "Ada Lovelace");
    assert_eq!(
        markup.paragraphs.len(),
        format_resume(&sample_resume()).split('\n').count()
    );
}

#[test]
fn html_escapes_text() {
    let req = DocumentRequest::essay("A & B", ExportFormat::Docx, "<script>\nok");
    let html = assemble_markup(&req).to_html();
    assert!(html.contains("<h1>A &amp; B</h1>"));
    assert!(html.contains("<p>&lt;script&gt;</p><p>ok</p>"));
}
