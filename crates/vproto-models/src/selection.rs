//! Per-object image selection results.

use serde::{Deserialize, Serialize};

use crate::view::CanonicalView;

/// A loaded view image ready to be encoded into a request.
///
/// Immutable value object; owned by the selection that produced it
/// until the payload encoder consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub object_name: String,
    pub view_name: CanonicalView,
    /// Manifest-relative path the bytes were read from.
    pub filename: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

/// Reconciliation result for one object's views.
///
/// Invariants:
/// - `found_views` and `missing_views` partition [`CanonicalView::ALL`].
/// - `skipped_views` is a subset of `found_views`.
/// - every payload in `images` has a view in `found_views` that is
///   neither skipped nor backed by a path in `missing_files`.
/// - `found_views`, `skipped_views`, and `images` preserve canonical order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectImageSelection {
    pub object_name: String,
    /// Canonical views present in the manifest, whether or not they load.
    pub found_views: Vec<CanonicalView>,
    /// Canonical views absent from the manifest entirely.
    pub missing_views: Vec<CanonicalView>,
    /// Present views rejected by the RGB classifier.
    pub skipped_views: Vec<CanonicalView>,
    /// Classified files that do not exist on disk.
    pub missing_files: Vec<String>,
    /// Loaded payloads, in canonical view order.
    pub images: Vec<ImagePayload>,
}

impl ObjectImageSelection {
    /// A selection for an object with no usable `views` listing: all
    /// canonical views missing, everything else empty.
    pub fn all_missing(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            missing_views: CanonicalView::ALL.to_vec(),
            ..Default::default()
        }
    }
}
