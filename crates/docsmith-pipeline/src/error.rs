use thiserror::Error;

/// One failure per pipeline call, tagged with the step that produced it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid generation parameters: {0}")]
    InvalidParams(String),

    #[error("content generation failed: {0}")]
    Generation(String),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("delivery failed: {0}")]
    Delivery(String),

    #[error("saving the document failed: {0}")]
    Persist(String),

    #[error("a generation request is already in progress")]
    Busy,
}
