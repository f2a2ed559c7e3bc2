//! Artifact delivery: hand finished bytes to a save-to-disk mechanism.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use docsmith_core::models::artifact::RenderedArtifact;
use tracing::info;

use crate::error::ExportError;

/// Where a delivered artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub filename: String,
    pub bytes: usize,
    /// Filesystem path, for sinks that write files.
    pub path: Option<PathBuf>,
}

/// Receives artifacts once rendering is complete. The artifact is consumed;
/// nothing is retained by the pipeline after delivery.
pub trait ArtifactSink: Send + Sync {
    fn deliver(&self, artifact: RenderedArtifact) -> Result<Delivery, ExportError>;
}

/// Saves artifacts into a directory under their suggested filename.
///
/// Bytes go to a temporary file in the target directory first, which is
/// then persisted under the final name. A file with the same name is
/// replaced.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&self, artifact: RenderedArtifact) -> Result<Delivery, ExportError> {
        std::fs::create_dir_all(&self.dir)?;

        let filename = file_component(&artifact.suggested_filename);
        let dest = self.dir.join(&filename);

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&artifact.bytes)?;
        tmp.flush()?;
        tmp.persist(&dest)
            .map_err(|e| ExportError::Delivery(format!("{}: {}", dest.display(), e.error)))?;

        info!(path = %dest.display(), bytes = artifact.bytes.len(), mime = artifact.mime_type(), "artifact saved");

        Ok(Delivery {
            filename,
            bytes: artifact.bytes.len(),
            path: Some(dest),
        })
    }
}

/// Path separators in a title must not escape the target directory.
fn file_component(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}

/// Keeps delivered artifacts in memory. Useful for tests and previews.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<RenderedArtifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn delivered(&self) -> Vec<RenderedArtifact> {
        self.delivered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ArtifactSink for MemorySink {
    fn deliver(&self, artifact: RenderedArtifact) -> Result<Delivery, ExportError> {
        let delivery = Delivery {
            filename: artifact.suggested_filename.clone(),
            bytes: artifact.bytes.len(),
            path: None,
        };
        self.delivered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(artifact);
        Ok(delivery)
    }
}

impl<T: ArtifactSink + ?Sized> ArtifactSink for std::sync::Arc<T> {
    fn deliver(&self, artifact: RenderedArtifact) -> Result<Delivery, ExportError> {
        (**self).deliver(artifact)
    }
}
