//! Run orchestration: load, reconcile, collect, batch, submit.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use vproto_ingest::{
    collect_object_images, load_scene_export, load_views_manifest, select_manifest_objects,
    summarize_scene,
};
use vproto_models::{ImagePayload, ObjectImageSelection, RequestMessage};
use vproto_upload::{build_content_items, ImageStore};

use crate::batch::chunk_objects;
use crate::config::RunnerConfig;
use crate::error::{RunnerError, RunnerResult};
use crate::output::{output_dirs, resolve_output_root, safe_dir_name};
use crate::pipeline::SpecPipeline;
use crate::task::compose_task_text;

/// Name of the views manifest expected next to the scene export.
pub const VIEWS_MANIFEST_FILENAME: &str = "views_manifest.json";

/// One generation request, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub group: String,
    pub description: String,
    pub scene_path: PathBuf,
    /// Requested object names; empty selects every manifest object.
    pub object_names: Vec<String>,
}

/// Outcome summary of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Directory the specification artifacts were written under.
    pub spec_dir: PathBuf,
    pub batch_count: usize,
    pub total_images: usize,
    /// Requested names with no manifest match.
    pub missing_objects: Vec<String>,
}

/// Execute one generation run end to end.
///
/// Scene export and views manifest load failures are fatal. Per-object
/// and per-view problems are logged and carried as data. Batches run
/// strictly one after another; a pipeline failure or empty pipeline
/// result aborts the run.
pub async fn run_generation(
    request: &RunRequest,
    config: &RunnerConfig,
    store: Option<&dyn ImageStore>,
    pipeline: &dyn SpecPipeline,
) -> RunnerResult<RunSummary> {
    let group_dir = request
        .scene_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    // Inline-only runs ignore any store the caller wired up.
    let store = if config.upload_images { store } else { None };

    let (scene, scene_json_text) = load_scene_export(&request.scene_path)?;
    info!("{}", summarize_scene(&scene));

    let manifest_path = group_dir.join(VIEWS_MANIFEST_FILENAME);
    let (manifest, views_manifest_text) = load_views_manifest(&manifest_path)?;
    info!("Manifest objects: {}", manifest.objects.len());

    let (selected_objects, missing_objects) =
        select_manifest_objects(&manifest.objects, &request.object_names);
    if !missing_objects.is_empty() {
        warn!(
            "Manifest missing requested objects: {}",
            missing_objects.join(", ")
        );
    }

    let mut selections: Vec<ObjectImageSelection> = Vec::with_capacity(selected_objects.len());
    for object in &selected_objects {
        let selection = collect_object_images(&group_dir, object);
        log_selection(&selection);
        selections.push(selection);
    }

    let total_images: usize = selections.iter().map(|s| s.images.len()).sum();
    info!("Images ready to send: {}", total_images);

    let root = resolve_output_root(config.output_root.as_deref());
    let (_group_dir, spec_dir) = output_dirs(&root, &request.group)?;

    let selected_names: Vec<String> = selected_objects
        .iter()
        .map(|o| o.object_name.clone())
        .collect();

    let batches = if selections.is_empty() {
        vec![Vec::new()]
    } else {
        chunk_objects(selections, config.max_objects_per_run)
    };
    let batch_count = batches.len();
    if batch_count > 1 {
        info!(
            "Splitting into {} pipeline runs (max {} objects each)",
            batch_count, config.max_objects_per_run
        );
    }

    for (index, batch) in batches.into_iter().enumerate() {
        let batch_names: Vec<String> = batch.iter().map(|s| s.object_name.clone()).collect();
        let batch_images: Vec<ImagePayload> =
            batch.into_iter().flat_map(|s| s.images).collect();

        // Fall back to requested, then selected, names so the prompt
        // still lists objects when the batch itself is empty.
        let prompt_names = if !batch_names.is_empty() {
            &batch_names
        } else if !request.object_names.is_empty() {
            &request.object_names
        } else {
            &selected_names
        };
        let task_text = compose_task_text(&request.description, prompt_names);

        let content = build_content_items(
            &task_text,
            &scene_json_text,
            Some(&views_manifest_text),
            &batch_images,
            store,
        )
        .await;
        let messages = vec![RequestMessage::user(content)];

        let output_dir = if batch_count > 1 {
            let mut label = batch_names
                .iter()
                .map(|name| safe_dir_name(name))
                .collect::<Vec<_>>()
                .join("_");
            if label.is_empty() {
                label = format!("batch_{}", index + 1);
            }
            spec_dir.join(label)
        } else {
            spec_dir.clone()
        };

        info!(
            "Running batch {}/{} -> {}",
            index + 1,
            batch_count,
            output_dir.display()
        );
        match pipeline.run(&messages, &output_dir).await? {
            Some(result) => info!(
                "Batch {}/{} produced {} artifact(s)",
                index + 1,
                batch_count,
                result.files.len()
            ),
            None => return Err(RunnerError::NoOutput),
        }
    }

    Ok(RunSummary {
        spec_dir,
        batch_count,
        total_images,
        missing_objects,
    })
}

fn log_selection(selection: &ObjectImageSelection) {
    let found = join_views(&selection.found_views);
    let missing = join_views(&selection.missing_views);
    info!("[{}] views found: {}", selection.object_name, found);
    info!("[{}] views missing: {}", selection.object_name, missing);
    if !selection.skipped_views.is_empty() {
        info!(
            "[{}] views skipped (non-RGB): {}",
            selection.object_name,
            join_views(&selection.skipped_views)
        );
    }
    if !selection.missing_files.is_empty() {
        warn!(
            "[{}] missing files: {}",
            selection.object_name,
            selection.missing_files.join(", ")
        );
    }
}

fn join_views(views: &[vproto_models::CanonicalView]) -> String {
    if views.is_empty() {
        return "(none)".to_string();
    }
    views
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
