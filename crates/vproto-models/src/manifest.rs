//! Views-manifest document types.
//!
//! The manifest lists, per exported object, the rendered view files
//! available on disk. The loader in `vproto-ingest` validates key
//! presence strictly (any missing key is fatal for the whole manifest)
//! but tolerates wrong-typed values: a `viewName` or `file` that is not
//! a JSON string is preserved as `None` and skipped downstream instead
//! of failing the load.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single rendered view of one object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewEntry {
    /// Manifest view name, `None` when the manifest value was not a string.
    #[serde(rename = "viewName")]
    pub view_name: Option<String>,

    /// Relative path to the rendered file, `None` when not a string.
    pub file: Option<String>,
}

impl ViewEntry {
    /// Convenience constructor for well-formed entries.
    pub fn new(view_name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            view_name: Some(view_name.into()),
            file: Some(file.into()),
        }
    }
}

/// One object listed in the views manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestObject {
    /// Unique object name (the reconciliation key).
    #[serde(rename = "objectName")]
    pub object_name: String,

    /// Exporter-assigned stable identifier.
    #[serde(rename = "stableId")]
    pub stable_id: String,

    /// Rendered views. The strict loader always produces `Some`, but the
    /// collector degrades a `None` to an all-missing selection rather
    /// than erroring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<Vec<ViewEntry>>,
}

/// The whole views-manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsManifest {
    /// Group the export belongs to. Presence is required; shape is not
    /// interpreted beyond embedding the raw manifest text downstream.
    #[serde(rename = "groupName")]
    pub group_name: Value,

    /// Renderer settings, carried opaquely.
    #[serde(rename = "renderSettings")]
    pub render_settings: Value,

    /// Per-object view listings.
    pub objects: Vec<ManifestObject>,
}
