//! Upload error types.

use thiserror::Error;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur while talking to the image store.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to configure store client: {0}")]
    ConfigError(String),

    #[error("Store API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upload did not return a file id")]
    MissingFileId,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
