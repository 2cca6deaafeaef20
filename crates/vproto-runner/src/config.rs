//! Runner configuration.

use std::path::PathBuf;

/// Objects per pipeline run when no override is configured. Bounds
/// both request size and peak image memory.
pub const DEFAULT_MAX_OBJECTS_PER_RUN: usize = 2;

/// Runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Output root override; when `None` the runner probes the host
    /// application path and falls back to a local default.
    pub output_root: Option<PathBuf>,
    /// Maximum objects per pipeline run.
    pub max_objects_per_run: usize,
    /// Prefer uploading images over inline encoding.
    pub upload_images: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            output_root: None,
            max_objects_per_run: DEFAULT_MAX_OBJECTS_PER_RUN,
            upload_images: true,
        }
    }
}

impl RunnerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            output_root: std::env::var("VPROTO_OUTPUT_ROOT").ok().map(PathBuf::from),
            max_objects_per_run: std::env::var("VPROTO_MAX_OBJECTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_OBJECTS_PER_RUN),
            upload_images: std::env::var("VPROTO_UPLOAD_IMAGES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}
