use std::sync::Arc;

use docsmith_core::models::document::{DocumentRequest, ExportFormat};
use docsmith_export::deliver::{ArtifactSink, DirectorySink, MemorySink};
use docsmith_export::export::produce_artifact;
use docsmith_export::filename::{slug, suggested_filename, utc_date};
use docsmith_export::styles::DocumentStyles;
use jiff::civil::date;

#[test]
fn slug_lowercases_and_collapses_whitespace() {
    assert_eq!(slug("Climate Essay"), "climate-essay");
    assert_eq!(slug("My   Big\tResume"), "my-big-resume");
    assert_eq!(slug("Already-Hyphenated"), "already-hyphenated");
}

#[test]
fn filename_policy() {
    let d = date(2025, 5, 15);
    assert_eq!(
        suggested_filename("Climate Essay", d, ExportFormat::Pdf),
        "climate-essay-2025-05-15.pdf"
    );
    assert_eq!(
        suggested_filename("  ", d, ExportFormat::Docx),
        "untitled-document-2025-05-15.docx"
    );
}

#[test]
fn filename_date_is_utc() {
    let late_evening: jiff::Timestamp = "2025-05-15T23:30:00-05:00".parse().unwrap();
    assert_eq!(utc_date(late_evening), date(2025, 5, 16));
    assert_eq!(
        suggested_filename("Climate Essay", utc_date(late_evening), ExportFormat::Pdf),
        "climate-essay-2025-05-16.pdf"
    );
}

#[test]
fn climate_essay_end_to_end() {
    let req = DocumentRequest::essay("Climate Essay", ExportFormat::Pdf, "Para one.\nPara two.");
    let artifact = produce_artifact(&req, date(2025, 5, 15), &DocumentStyles::default()).unwrap();
    assert_eq!(artifact.suggested_filename, "climate-essay-2025-05-15.pdf");
    assert_eq!(artifact.mime_type(), "application/pdf");
    assert!(!artifact.is_empty());
}

#[test]
fn empty_content_still_renders_both_formats() {
    for format in [ExportFormat::Pdf, ExportFormat::Docx] {
        let req = DocumentRequest::essay("Blank", format, "");
        let artifact =
            produce_artifact(&req, date(2025, 1, 1), &DocumentStyles::default()).unwrap();
        assert!(artifact.len() > 0, "{format} artifact is empty");
        assert_eq!(artifact.format, format);
    }
}

#[test]
fn same_title_same_day_same_name() {
    let styles = DocumentStyles::default();
    let d = date(2025, 5, 15);
    let a = produce_artifact(&DocumentRequest::essay("Notes", ExportFormat::Docx, "a"), d, &styles).unwrap();
    let b = produce_artifact(&DocumentRequest::essay("Notes", ExportFormat::Docx, "b"), d, &styles).unwrap();
    assert_eq!(a.suggested_filename, b.suggested_filename);
}

#[test]
fn directory_sink_writes_under_suggested_name() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path().join("out"));
    let req = DocumentRequest::essay("Climate Essay", ExportFormat::Pdf, "Para one.");
    let artifact = produce_artifact(&req, date(2025, 5, 15), &DocumentStyles::default()).unwrap();
    let expected = artifact.bytes.clone();

    let delivery = sink.deliver(artifact).unwrap();
    let path = delivery.path.unwrap();
    assert_eq!(path, dir.path().join("out").join("climate-essay-2025-05-15.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), expected);

    // Only the final file remains; the temporary one was persisted.
    let entries = std::fs::read_dir(dir.path().join("out")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn directory_sink_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let styles = DocumentStyles::default();
    let d = date(2025, 5, 15);

    sink.deliver(produce_artifact(&DocumentRequest::essay("Notes", ExportFormat::Pdf, "one"), d, &styles).unwrap())
        .unwrap();
    let second = produce_artifact(&DocumentRequest::essay("Notes", ExportFormat::Pdf, "two two two"), d, &styles)
        .unwrap();
    let expected = second.bytes.clone();
    let delivery = sink.deliver(second).unwrap();

    assert_eq!(std::fs::read(delivery.path.unwrap()).unwrap(), expected);
}

#[test]
fn directory_sink_neutralizes_path_separators() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let req = DocumentRequest::essay("../escape/attempt", ExportFormat::Pdf, "x");
    let artifact = produce_artifact(&req, date(2025, 5, 15), &DocumentStyles::default()).unwrap();

    let delivery = sink.deliver(artifact).unwrap();
    assert_eq!(delivery.path.unwrap().parent(), Some(dir.path()));
    assert_eq!(delivery.filename, "..-escape-attempt-2025-05-15.pdf");
}

#[test]
fn memory_sink_records_deliveries() {
    let sink = Arc::new(MemorySink::new());
    let req = DocumentRequest::essay("Memo", ExportFormat::Docx, "text");
    let artifact = produce_artifact(&req, date(2025, 5, 15), &DocumentStyles::default()).unwrap();

    let delivery = sink.deliver(artifact).unwrap();
    assert_eq!(delivery.path, None);
    assert_eq!(delivery.filename, "memo-2025-05-15.docx");
    assert_eq!(sink.delivered().len(), 1);
}
