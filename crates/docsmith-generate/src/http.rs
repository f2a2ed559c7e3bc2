use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use docsmith_core::models::document::DocumentType;
use docsmith_core::models::params::GenerationParams;

use crate::error::GenerateError;
use crate::generator::{ContentGenerator, GeneratedContent};

/// Client for hosted generation functions, one per document type, served at
/// `{base_url}/functions/v1/generate-{type}`.
pub struct HttpGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Body returned by a generation function. The essay function historically
/// answered with an `essay` key instead of `content`.
#[derive(Debug, Deserialize)]
struct FunctionResponse {
    #[serde(default, alias = "essay")]
    content: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpGenerator {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn endpoint_url(&self, doc_type: DocumentType) -> String {
        format!(
            "{}/functions/v1/{}",
            self.base_url.trim_end_matches('/'),
            doc_type.endpoint()
        )
    }
}

impl ContentGenerator for HttpGenerator {
    async fn generate(&self, params: &GenerationParams) -> Result<GeneratedContent, GenerateError> {
        params.validate()?;
        let url = self.endpoint_url(params.doc_type());
        info!(url = %url, "invoking generation function");

        let mut req = self.client.post(&url).json(&params.body()?);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| GenerateError::Invocation(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| GenerateError::Invocation(e.to_string()))?;

        decode_response(status, &body)
    }
}

/// Interpret a generation function's HTTP status and body.
///
/// An `error` field wins over everything else; a non-2xx status without
/// one is reported with the raw body; a 2xx response must carry content.
pub fn decode_response(status: u16, body: &str) -> Result<GeneratedContent, GenerateError> {
    let success = (200..300).contains(&status);
    let parsed: Result<FunctionResponse, _> = serde_json::from_str(body);

    match parsed {
        Ok(FunctionResponse {
            error: Some(error), ..
        }) => {
            warn!(status, error = %error, "generation function reported an error");
            Err(GenerateError::Remote(error))
        }
        Ok(_) | Err(_) if !success => Err(GenerateError::Remote(format!(
            "HTTP {status}: {}",
            body.trim()
        ))),
        Ok(FunctionResponse {
            content: Some(content),
            ..
        }) => Ok(GeneratedContent { content }),
        Ok(_) => Err(GenerateError::ResponseParse(
            "response has no content field".to_string(),
        )),
        Err(e) => Err(GenerateError::ResponseParse(e.to_string())),
    }
}
