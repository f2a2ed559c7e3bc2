use thiserror::Error;

use docsmith_core::error::CoreError;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid generation parameters: {0}")]
    InvalidParams(#[from] CoreError),

    #[error("generation call failed: {0}")]
    Invocation(String),

    #[error("generation function returned an error: {0}")]
    Remote(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("template rendering failed: {0}")]
    Template(String),

    #[error("HTTP client config error: {0}")]
    Config(String),
}

impl From<tera::Error> for GenerateError {
    fn from(e: tera::Error) -> Self {
        GenerateError::Template(e.to_string())
    }
}
