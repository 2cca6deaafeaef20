//! Per-object image collection.

use std::fs;
use std::path::Path;

use tracing::debug;

use vproto_models::{ImagePayload, ManifestObject, ObjectImageSelection};

use crate::views::{is_rgb_view_file, select_ordered_views};

/// Load RGB view images for an object and track missing/ignored views.
///
/// Traverses the object's views in canonical order. Non-RGB files are
/// recorded in `skipped_views`; classified files absent from disk are
/// recorded in `missing_files`; only views that classify and resolve
/// are read into `images`. An object without a usable `views` listing
/// degrades to an all-missing selection. Nothing here is an error:
/// absence is a reportable classification.
pub fn collect_object_images(base_dir: &Path, object: &ManifestObject) -> ObjectImageSelection {
    let Some(views) = object.views.as_deref() else {
        return ObjectImageSelection::all_missing(&object.object_name);
    };

    let ordered = select_ordered_views(views);
    let mut images = Vec::new();
    let mut missing_files = Vec::new();
    let mut skipped_views = Vec::new();

    for entry in &ordered.ordered {
        // Wrong-typed manifest values are skipped silently.
        let (Some(view_name), Some(file_name)) = (entry.view_name.as_deref(), entry.file.as_deref())
        else {
            continue;
        };
        let Some(view) = vproto_models::CanonicalView::from_name(view_name) else {
            continue;
        };

        if !is_rgb_view_file(file_name) {
            skipped_views.push(view);
            continue;
        }

        let image_path = base_dir.join(file_name);
        if !image_path.exists() {
            missing_files.push(file_name.to_string());
            continue;
        }

        match fs::read(&image_path) {
            Ok(content) => {
                debug!(
                    "Loaded {} ({} bytes) for {}",
                    image_path.display(),
                    content.len(),
                    object.object_name
                );
                images.push(ImagePayload {
                    object_name: object.object_name.clone(),
                    view_name: view,
                    filename: file_name.to_string(),
                    mime_type: "image/png".to_string(),
                    content,
                });
            }
            // The file vanished between the existence check and the read.
            Err(_) => missing_files.push(file_name.to_string()),
        }
    }

    ObjectImageSelection {
        object_name: object.object_name.clone(),
        found_views: ordered.found,
        missing_views: ordered.missing,
        skipped_views,
        missing_files,
        images,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vproto_models::{CanonicalView, ViewEntry};

    fn object_with_views(name: &str, views: Vec<ViewEntry>) -> ManifestObject {
        ManifestObject {
            object_name: name.to_string(),
            stable_id: "obj-001".to_string(),
            views: Some(views),
        }
    }

    #[test]
    fn test_collect_tracks_missing_and_skipped() {
        let dir = TempDir::new().unwrap();
        let views_dir = dir.path().join("views");
        fs::create_dir(&views_dir).unwrap();
        fs::write(views_dir.join("toaster_front.png"), b"png").unwrap();

        let obj = object_with_views(
            "Toaster",
            vec![
                ViewEntry::new("front", "views/toaster_front.png"),
                ViewEntry::new("back", "views/toaster_back_seg.png"),
                ViewEntry::new("left", "views/toaster_left.png"),
            ],
        );

        let selection = collect_object_images(dir.path(), &obj);
        assert_eq!(selection.object_name, "Toaster");
        assert_eq!(
            selection.found_views,
            vec![
                CanonicalView::Front,
                CanonicalView::Back,
                CanonicalView::Left
            ]
        );
        assert!(selection.missing_views.contains(&CanonicalView::Right));
        assert_eq!(selection.skipped_views, vec![CanonicalView::Back]);
        assert_eq!(selection.missing_files, vec!["views/toaster_left.png"]);
        assert_eq!(selection.images.len(), 1);
        assert_eq!(selection.images[0].view_name, CanonicalView::Front);
        assert_eq!(selection.images[0].content, b"png");
        assert_eq!(selection.images[0].mime_type, "image/png");
    }

    #[test]
    fn test_object_without_views_degrades_to_all_missing() {
        let dir = TempDir::new().unwrap();
        let obj = ManifestObject {
            object_name: "Kettle".to_string(),
            stable_id: "obj-002".to_string(),
            views: None,
        };

        let selection = collect_object_images(dir.path(), &obj);
        assert_eq!(selection.missing_views, CanonicalView::ALL.to_vec());
        assert!(selection.found_views.is_empty());
        assert!(selection.images.is_empty());
        assert!(selection.missing_files.is_empty());
        assert!(selection.skipped_views.is_empty());
    }

    #[test]
    fn test_images_follow_canonical_order_not_manifest_order() {
        let dir = TempDir::new().unwrap();
        for name in ["a.png", "b.png"] {
            fs::write(dir.path().join(name), b"png").unwrap();
        }

        let obj = object_with_views(
            "Lamp",
            vec![
                ViewEntry::new("top", "b.png"),
                ViewEntry::new("front", "a.png"),
            ],
        );

        let selection = collect_object_images(dir.path(), &obj);
        assert_eq!(
            selection
                .images
                .iter()
                .map(|i| i.view_name)
                .collect::<Vec<_>>(),
            vec![CanonicalView::Front, CanonicalView::Top]
        );
    }

    #[test]
    fn test_wrong_typed_entries_are_skipped_silently() {
        let dir = TempDir::new().unwrap();
        let obj = object_with_views(
            "Lamp",
            vec![ViewEntry {
                view_name: Some("front".into()),
                file: None,
            }],
        );

        let selection = collect_object_images(dir.path(), &obj);
        // The view is found (it has a canonical name) but produces
        // neither an image nor a skip nor a missing-file record.
        assert_eq!(selection.found_views, vec![CanonicalView::Front]);
        assert!(selection.images.is_empty());
        assert!(selection.skipped_views.is_empty());
        assert!(selection.missing_files.is_empty());
    }

    #[test]
    fn test_missing_file_is_recorded_not_raised() {
        let dir = TempDir::new().unwrap();
        let obj = object_with_views("Lamp", vec![ViewEntry::new("front", "gone.png")]);

        let selection = collect_object_images(dir.path(), &obj);
        assert_eq!(selection.missing_files, vec!["gone.png"]);
        assert!(selection.images.is_empty());
    }
}
