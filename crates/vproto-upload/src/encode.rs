//! Request payload encoding with upload-then-inline fallback.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::warn;

use vproto_models::{ImagePayload, InputItem};

use crate::client::ImageStore;

/// Encode an image as an inline `data:` URL.
pub fn data_url(image: &ImagePayload) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        STANDARD.encode(&image.content)
    )
}

/// Build the content items for one batch request.
///
/// Always emits, in order: the task text, the raw scene-export JSON,
/// and (when present) the raw views-manifest JSON. Images follow. With
/// a store, each image is uploaded in list order; successes become
/// file-id references and failures are retried as inline data URLs
/// after the upload pass, preserving their original relative order.
/// Without a store, every image is inlined directly. A failed upload
/// degrades that one image; it never drops it or aborts the batch.
pub async fn build_content_items(
    task_text: &str,
    scene_json_text: &str,
    views_manifest_text: Option<&str>,
    images: &[ImagePayload],
    store: Option<&dyn ImageStore>,
) -> Vec<InputItem> {
    let mut content = vec![
        InputItem::text(task_text),
        InputItem::text(format!("SCENE_JSON:\n{scene_json_text}")),
    ];
    if let Some(manifest_text) = views_manifest_text {
        content.push(InputItem::text(format!(
            "VIEWS_MANIFEST_JSON:\n{manifest_text}"
        )));
    }

    if images.is_empty() {
        return content;
    }

    match store {
        Some(store) => {
            let mut failed: Vec<&ImagePayload> = Vec::new();
            for image in images {
                match store.upload(&image.content, &image.filename).await {
                    Ok(file_id) => content.push(InputItem::image_file(file_id)),
                    Err(e) => {
                        warn!("Failed to upload image {}: {}", image.filename, e);
                        failed.push(image);
                    }
                }
            }
            // Retry pass: inline everything the store rejected.
            content.extend(
                failed
                    .into_iter()
                    .map(|image| InputItem::image_url(data_url(image))),
            );
        }
        None => {
            content.extend(
                images
                    .iter()
                    .map(|image| InputItem::image_url(data_url(image))),
            );
        }
    }

    content
}
