//! Runner error types.

use thiserror::Error;

pub type RunnerResult<T> = Result<T, RunnerError>;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Pipeline run failed: {0}")]
    PipelineFailed(String),

    #[error("No output received from the generation pipeline")]
    NoOutput,

    #[error("Ingest error: {0}")]
    Ingest(#[from] vproto_ingest::IngestError),

    #[error("Upload error: {0}")]
    Upload(#[from] vproto_upload::UploadError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunnerError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn pipeline_failed(msg: impl Into<String>) -> Self {
        Self::PipelineFailed(msg.into())
    }
}
