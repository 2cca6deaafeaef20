//! View classification and canonical ordering.

use std::collections::HashMap;

use vproto_models::{CanonicalView, ViewEntry};

/// Markers identifying non-photographic render passes. Matched
/// case-insensitively anywhere in the path.
pub const NON_RGB_MARKERS: [&str; 3] = ["_seg", "_depth", "_normal"];

/// Return true for RGB PNG view files (non-seg/depth/normal).
///
/// Pure: the whole path is lowercased before both the extension check
/// and the marker scan.
pub fn is_rgb_view_file(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    if !lowered.ends_with(".png") {
        return false;
    }
    !NON_RGB_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Result of sorting a view listing into canonical order.
#[derive(Debug)]
pub struct OrderedViews<'a> {
    /// Entries for `found`, in the same (canonical) order.
    pub ordered: Vec<&'a ViewEntry>,
    /// Canonical names present in the listing, canonical order.
    pub found: Vec<CanonicalView>,
    /// Canonical names absent from the listing, canonical order.
    pub missing: Vec<CanonicalView>,
}

/// Sort views into the canonical ordering and list missing names.
///
/// Deduplication is first-seen-wins: a repeated `viewName` never
/// overrides the first occurrence and never errors. Entries whose name
/// is absent, non-string, or not one of the eight canonical names are
/// dropped entirely (they are neither found nor missing).
pub fn select_ordered_views(views: &[ViewEntry]) -> OrderedViews<'_> {
    let mut by_view: HashMap<CanonicalView, &ViewEntry> = HashMap::new();
    for entry in views {
        let Some(view) = entry.view_name.as_deref().and_then(CanonicalView::from_name) else {
            continue;
        };
        by_view.entry(view).or_insert(entry);
    }

    let found: Vec<CanonicalView> = CanonicalView::ALL
        .into_iter()
        .filter(|v| by_view.contains_key(v))
        .collect();
    let missing: Vec<CanonicalView> = CanonicalView::ALL
        .into_iter()
        .filter(|v| !by_view.contains_key(v))
        .collect();
    let ordered = found.iter().map(|v| by_view[v]).collect();

    OrderedViews {
        ordered,
        found,
        missing,
    }
}
