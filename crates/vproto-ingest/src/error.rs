//! Ingestion error types.
//!
//! These cover only the fatal-load taxonomy: a scene export or views
//! manifest that cannot be loaded aborts the run. Per-object and
//! per-view conditions are reported as data on the selection types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while loading input documents.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Scene JSON not found: {0}")]
    SceneNotFound(PathBuf),

    #[error("Failed to parse scene JSON: {path}: {message}")]
    SceneParse { path: PathBuf, message: String },

    #[error("Malformed scene JSON: {0}")]
    SceneMalformed(String),

    #[error("Views manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Failed to parse views manifest: {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Malformed views manifest: {0}")]
    ManifestMalformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    pub fn scene_malformed(msg: impl Into<String>) -> Self {
        Self::SceneMalformed(msg.into())
    }

    pub fn manifest_malformed(msg: impl Into<String>) -> Self {
        Self::ManifestMalformed(msg.into())
    }
}
