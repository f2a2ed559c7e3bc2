use docsmith_cli::backends::{Generator, Store, build_orchestrator};
use docsmith_cli::commands;
use docsmith_cli::config::{DocsmithConfig, GeneratorConfig, StorageConfig};
use docsmith_core::models::document::{DocumentType, ExportFormat};
use docsmith_core::models::params::{CoverLetterParams, GenerationParams};
use docsmith_pipeline::orchestrator::GenerationRequest;
use docsmith_storage::repository::DocumentStore;

#[test]
fn generator_follows_config() {
    assert!(matches!(
        Generator::from_config(&GeneratorConfig::Template).unwrap(),
        Generator::Template(_)
    ));
    let http = GeneratorConfig::Http {
        base_url: "http://localhost:54321".to_string(),
        api_key: None,
        timeout_secs: 5,
    };
    assert!(matches!(
        Generator::from_config(&http).unwrap(),
        Generator::Http(_)
    ));
}

#[tokio::test]
async fn local_files_by_default() {
    assert!(matches!(
        Store::from_config(&StorageConfig::default()).await,
        Store::File(_)
    ));
    assert!(matches!(
        Store::from_config(&StorageConfig::Memory).await,
        Store::Memory(_)
    ));
}

fn local_config(data: &std::path::Path) -> DocsmithConfig {
    DocsmithConfig {
        storage: StorageConfig::Local {
            dir: Some(data.to_path_buf()),
        },
        ..DocsmithConfig::default()
    }
}

#[tokio::test]
async fn cover_letter_lands_in_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    let orchestrator = build_orchestrator(&local_config(data.path()), dir.path().to_path_buf())
        .await
        .unwrap()
        .with_date(jiff::civil::date(2025, 5, 15));

    let outcome = orchestrator
        .generate(GenerationRequest {
            params: GenerationParams::CoverLetter(CoverLetterParams {
                title: Some("Letter to Acme".to_string()),
                full_name: "Jane Doe".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                highlights: vec![],
            }),
            format: ExportFormat::Docx,
        })
        .await
        .unwrap();

    let path = dir.path().join("letter-to-acme-2025-05-15.docx");
    assert!(path.exists());
    assert!(outcome.content.contains("Jane Doe"));
    assert!(commands::describe_outcome(&outcome).contains("letter-to-acme-2025-05-15.docx"));

    let history = orchestrator.store().list().await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(commands::history_line(&history[0]).contains("cover-letter"));
}

#[test]
fn export_request_reads_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "one\ntwo").unwrap();

    let request =
        commands::export_request(&input, None, DocumentType::Essay, ExportFormat::Pdf).unwrap();
    assert_eq!(request.title, "Untitled Document");
    assert!(matches!(
        request.content,
        docsmith_core::models::document::DocumentContent::Text(ref text) if text == "one\ntwo"
    ));
}

#[test]
fn export_request_takes_resume_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("resume.json");
    std::fs::write(
        &input,
        r#"{ "title": "Jane Resume", "personalInfo": { "fullName": "Jane Doe" } }"#,
    )
    .unwrap();

    let request =
        commands::export_request(&input, None, DocumentType::Resume, ExportFormat::Docx).unwrap();
    assert_eq!(request.title, "Jane Resume");
    assert_eq!(request.doc_type, DocumentType::Resume);
}

#[test]
fn bad_resume_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("resume.json");
    std::fs::write(&input, "not json").unwrap();

    let err = commands::load_resume(&input).unwrap_err();
    assert!(err.to_string().contains("invalid resume JSON"));
}

#[tokio::test]
async fn history_survives_a_new_process() {
    let out = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    let config = local_config(data.path());

    let first_run = build_orchestrator(&config, out.path().to_path_buf()).await.unwrap();
    first_run
        .generate(GenerationRequest {
            params: GenerationParams::CoverLetter(CoverLetterParams {
                title: Some("Kept".to_string()),
                full_name: "Jane Doe".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                highlights: vec![],
            }),
            format: ExportFormat::Pdf,
        })
        .await
        .unwrap();
    drop(first_run);

    let second_run = Store::from_config(&config.storage).await;
    let docs = commands::history(&second_run).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "Kept");
}

#[tokio::test]
async fn history_refuses_memory_storage() {
    let store = Store::from_config(&StorageConfig::Memory).await;
    let err = commands::history(&store).await.unwrap_err();
    assert!(err.to_string().contains("persistent storage"));
}
