//! Concrete generator and store selected by the config file.

use std::path::PathBuf;
use std::time::Duration;

use uuid::Uuid;

use docsmith_core::models::params::GenerationParams;
use docsmith_core::models::record::{DocumentPatch, NewDocument, StoredDocument};
use docsmith_export::deliver::DirectorySink;
use docsmith_generate::error::GenerateError;
use docsmith_generate::generator::{ContentGenerator, GeneratedContent};
use docsmith_generate::http::HttpGenerator;
use docsmith_generate::template::TemplateGenerator;
use docsmith_pipeline::orchestrator::Orchestrator;
use docsmith_storage::error::StorageError;
use docsmith_storage::file::FileStore;
use docsmith_storage::memory::MemoryStore;
use docsmith_storage::repository::DocumentStore;
use docsmith_storage::s3::S3Store;

use crate::config::{self, DocsmithConfig, GeneratorConfig, StorageConfig};

pub type AppOrchestrator = Orchestrator<Generator, Store, DirectorySink>;

pub enum Generator {
    Template(TemplateGenerator),
    Http(HttpGenerator),
}

impl Generator {
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        match config {
            GeneratorConfig::Template => Ok(Self::Template(TemplateGenerator::new()?)),
            GeneratorConfig::Http {
                base_url,
                api_key,
                timeout_secs,
            } => Ok(Self::Http(HttpGenerator::new(
                base_url.clone(),
                api_key.clone(),
                Duration::from_secs(*timeout_secs),
            )?)),
        }
    }
}

impl ContentGenerator for Generator {
    async fn generate(&self, params: &GenerationParams) -> Result<GeneratedContent, GenerateError> {
        match self {
            Generator::Template(g) => g.generate(params).await,
            Generator::Http(g) => g.generate(params).await,
        }
    }
}

pub enum Store {
    File(FileStore),
    Memory(MemoryStore),
    S3(S3Store),
}

impl Store {
    pub async fn from_config(config: &StorageConfig) -> Self {
        match config {
            StorageConfig::Local { dir } => Self::File(FileStore::new(
                dir.clone().unwrap_or_else(config::default_data_dir),
            )),
            StorageConfig::Memory => Self::Memory(MemoryStore::new()),
            StorageConfig::S3 { bucket, region } => {
                let client = docsmith_storage::client::build_client(region.as_deref()).await;
                Self::S3(S3Store::new(client, bucket.clone()))
            }
        }
    }
}

impl DocumentStore for Store {
    async fn insert(&self, doc: NewDocument) -> Result<StoredDocument, StorageError> {
        match self {
            Store::File(s) => s.insert(doc).await,
            Store::Memory(s) => s.insert(doc).await,
            Store::S3(s) => s.insert(doc).await,
        }
    }

    async fn get(&self, id: Uuid) -> Result<StoredDocument, StorageError> {
        match self {
            Store::File(s) => s.get(id).await,
            Store::Memory(s) => s.get(id).await,
            Store::S3(s) => s.get(id).await,
        }
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StorageError> {
        match self {
            Store::File(s) => s.list().await,
            Store::Memory(s) => s.list().await,
            Store::S3(s) => s.list().await,
        }
    }

    async fn update(&self, id: Uuid, patch: DocumentPatch) -> Result<StoredDocument, StorageError> {
        match self {
            Store::File(s) => s.update(id, patch).await,
            Store::Memory(s) => s.update(id, patch).await,
            Store::S3(s) => s.update(id, patch).await,
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        match self {
            Store::File(s) => s.delete(id).await,
            Store::Memory(s) => s.delete(id).await,
            Store::S3(s) => s.delete(id).await,
        }
    }
}

pub async fn build_orchestrator(
    config: &DocsmithConfig,
    out_dir: PathBuf,
) -> eyre::Result<AppOrchestrator> {
    let generator = Generator::from_config(&config.generator)?;
    let store = Store::from_config(&config.storage).await;
    tracing::debug!(out_dir = %out_dir.display(), "orchestrator ready");
    Ok(Orchestrator::new(
        generator,
        store,
        DirectorySink::new(out_dir),
        config.styles.clone(),
    ))
}
