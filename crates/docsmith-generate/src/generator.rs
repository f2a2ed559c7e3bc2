use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use docsmith_core::models::params::GenerationParams;

use crate::error::GenerateError;

/// Text produced by a generator, ready for the export pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub content: String,
}

/// Produces document text from validated generation parameters.
///
/// Implementations may be non-deterministic; callers must not assume two
/// calls with the same parameters return the same text.
pub trait ContentGenerator: Send + Sync {
    fn generate(
        &self,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<GeneratedContent, GenerateError>> + Send;
}

impl<T: ContentGenerator + ?Sized> ContentGenerator for Arc<T> {
    fn generate(
        &self,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<GeneratedContent, GenerateError>> + Send {
        (**self).generate(params)
    }
}
