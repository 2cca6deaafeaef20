//! Views-manifest loading and validation.
//!
//! Validation is strict on structure and key presence: the root, every
//! object entry, and every view entry must carry their required keys,
//! and `objects`/`views` must be arrays — any violation fails the whole
//! manifest (no partial manifest). Value types beyond that are
//! tolerated: a non-string `viewName` or `file` loads as `None` and is
//! skipped during collection.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use vproto_models::{ManifestObject, ViewEntry, ViewsManifest};

use crate::error::{IngestError, IngestResult};

/// Load and validate the views manifest.
///
/// Returns the typed manifest together with the raw file text (the raw
/// text is embedded verbatim in the downstream request).
pub fn load_views_manifest(manifest_path: &Path) -> IngestResult<(ViewsManifest, String)> {
    if !manifest_path.exists() {
        return Err(IngestError::ManifestNotFound(manifest_path.to_path_buf()));
    }

    let raw_text = fs::read_to_string(manifest_path)?;
    let data: Value = serde_json::from_str(&raw_text).map_err(|e| IngestError::ManifestParse {
        path: manifest_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let root = data
        .as_object()
        .ok_or_else(|| IngestError::manifest_malformed("root must be an object"))?;

    for key in ["groupName", "renderSettings", "objects"] {
        if !root.contains_key(key) {
            return Err(IngestError::manifest_malformed("missing required keys"));
        }
    }

    let raw_objects = root
        .get("objects")
        .and_then(Value::as_array)
        .ok_or_else(|| IngestError::manifest_malformed("'objects' must be a list"))?;

    let mut objects = Vec::with_capacity(raw_objects.len());
    for raw_obj in raw_objects {
        let obj = raw_obj
            .as_object()
            .ok_or_else(|| IngestError::manifest_malformed("object entries must be objects"))?;

        for key in ["objectName", "stableId", "views"] {
            if !obj.contains_key(key) {
                return Err(IngestError::manifest_malformed(
                    "object missing required keys",
                ));
            }
        }

        let raw_views = obj
            .get("views")
            .and_then(Value::as_array)
            .ok_or_else(|| IngestError::manifest_malformed("'views' must be a list"))?;

        let mut views = Vec::with_capacity(raw_views.len());
        for raw_view in raw_views {
            let view = raw_view
                .as_object()
                .ok_or_else(|| IngestError::manifest_malformed("view entries must be objects"))?;

            if !view.contains_key("viewName") || !view.contains_key("file") {
                return Err(IngestError::manifest_malformed("view missing required keys"));
            }

            views.push(ViewEntry {
                view_name: view
                    .get("viewName")
                    .and_then(Value::as_str)
                    .map(String::from),
                file: view.get("file").and_then(Value::as_str).map(String::from),
            });
        }

        objects.push(ManifestObject {
            object_name: obj
                .get("objectName")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or("UnnamedObject")
                .to_string(),
            stable_id: obj
                .get("stableId")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            views: Some(views),
        });
    }

    debug!(
        "Loaded views manifest from {} ({} objects)",
        manifest_path.display(),
        objects.len()
    );

    let manifest = ViewsManifest {
        group_name: root.get("groupName").cloned().unwrap_or(Value::Null),
        render_settings: root.get("renderSettings").cloned().unwrap_or(Value::Null),
        objects,
    };
    Ok((manifest, raw_text))
}
