//! Scene-export loading and normalization.
//!
//! The exporter's JSON is lenient: vectors appear as lists or
//! `{x,y,z,w}` maps, meshes and materials are optional, children nest
//! arbitrarily. Loading normalizes everything into the fixed-shape
//! types in `vproto-models` while keeping the raw text around, since
//! the raw text is embedded verbatim in the downstream request.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use vproto_models::{MeshData, SceneExport, SceneObject, Transform};

use crate::error::{IngestError, IngestResult};

/// Load and validate the scene JSON export.
///
/// Returns the normalized export together with the raw file text.
/// A missing file, unparseable JSON, a non-object root, or a missing
/// `objects` array are all fatal.
pub fn load_scene_export(scene_path: &Path) -> IngestResult<(SceneExport, String)> {
    if !scene_path.exists() {
        return Err(IngestError::SceneNotFound(scene_path.to_path_buf()));
    }

    let raw_text = fs::read_to_string(scene_path)?;
    let data: Value = serde_json::from_str(&raw_text).map_err(|e| IngestError::SceneParse {
        path: scene_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let root = data
        .as_object()
        .ok_or_else(|| IngestError::scene_malformed("root must be an object"))?;

    let exported = root
        .get("objects")
        .and_then(Value::as_array)
        .ok_or_else(|| IngestError::scene_malformed("missing 'objects' array"))?;

    let objects = exported
        .iter()
        .filter_map(Value::as_object)
        .map(map_exported_object)
        .collect();

    debug!("Loaded scene export from {}", scene_path.display());

    let export = SceneExport {
        source: scene_path.display().to_string(),
        group_name: string_or_empty(root.get("groupName")),
        description: string_or_empty(root.get("description")),
        objects,
    };
    Ok((export, raw_text))
}

/// Generate a brief textual summary of a loaded scene.
pub fn summarize_scene(scene: &SceneExport) -> String {
    let mut lines = vec![
        format!("Scene JSON: {}", scene.source),
        format!("Exported objects: {}", scene.objects.len()),
    ];
    for obj in scene.objects.iter().take(5) {
        let tri_count = obj.mesh.as_ref().map(MeshData::triangle_count).unwrap_or(0);
        lines.push(format!(
            "- {} (tris: {}, children: {})",
            obj.name,
            tri_count,
            obj.children.len()
        ));
    }
    if scene.objects.len() > 5 {
        lines.push(format!("...and {} more", scene.objects.len() - 5));
    }
    lines.join("\n")
}

/// Convert a raw exported object into the normalized shape.
fn map_exported_object(obj: &Map<String, Value>) -> SceneObject {
    let transform = obj.get("transform").and_then(Value::as_object);
    let mesh = obj.get("mesh").and_then(Value::as_object);
    let materials = obj
        .get("materials")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let children = obj
        .get("children")
        .and_then(Value::as_array)
        .map(|raw| {
            raw.iter()
                .filter_map(Value::as_object)
                .map(map_exported_object)
                .collect()
        })
        .unwrap_or_default();

    let name = obj
        .get("name")
        .or_else(|| obj.get("Name"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("UnnamedObject")
        .to_string();

    SceneObject {
        name,
        transform: Transform {
            position: safe_vec3(transform.and_then(|t| t.get("position"))),
            // Rotations may include w; keep up to 4 components.
            rotation: safe_vec4(transform.and_then(|t| t.get("rotation"))),
            scale: safe_vec3(transform.and_then(|t| t.get("scale"))),
        },
        mesh: mesh.map(|m| MeshData {
            vertices: array_or_empty(m.get("vertices")),
            triangles: array_or_empty(m.get("triangles")),
            uvs: array_or_empty(m.get("uvs")),
            normals: array_or_empty(m.get("normals")),
        }),
        materials,
        children,
    }
}

/// Normalize a vector-like value (list or `{x,y,z,w}` map) into a
/// fixed-length component list, padding with zeros.
fn safe_vec(value: Option<&Value>, length: usize) -> Vec<f64> {
    let mut out = match value {
        Some(Value::Object(map)) => {
            let keys: &[&str] = if length >= 4 {
                &["x", "y", "z", "w"]
            } else {
                &["x", "y", "z"]
            };
            keys.iter()
                .take(length)
                .map(|k| map.get(*k).and_then(Value::as_f64).unwrap_or(0.0))
                .collect()
        }
        Some(Value::Array(items)) => items
            .iter()
            .take(length)
            .map(|v| v.as_f64().unwrap_or(0.0))
            .collect(),
        _ => Vec::new(),
    };
    out.resize(length, 0.0);
    out
}

fn safe_vec3(value: Option<&Value>) -> [f64; 3] {
    let v = safe_vec(value, 3);
    [v[0], v[1], v[2]]
}

fn safe_vec4(value: Option<&Value>) -> [f64; 4] {
    let v = safe_vec(value, 4);
    [v[0], v[1], v[2], v[3]]
}

fn array_or_empty(value: Option<&Value>) -> Vec<Value> {
    value.and_then(Value::as_array).cloned().unwrap_or_default()
}

fn string_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_scene(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_scene_normalizes_objects() {
        let file = write_scene(
            r#"{
                "groupName": "Kitchen",
                "objects": [
                    {
                        "name": "Toaster",
                        "transform": {
                            "position": {"x": 1.0, "y": 2.0, "z": 3.0},
                            "rotation": [0.0, 0.0, 0.0, 1.0],
                            "scale": [1.0]
                        },
                        "mesh": {"vertices": [], "triangles": [0, 1, 2, 0, 2, 3]},
                        "children": [{"name": "Lever"}, "junk"]
                    }
                ]
            }"#,
        );

        let (scene, raw) = load_scene_export(file.path()).unwrap();
        assert!(raw.contains("Toaster"));
        assert_eq!(scene.group_name, "Kitchen");
        assert_eq!(scene.objects.len(), 1);

        let toaster = &scene.objects[0];
        assert_eq!(toaster.transform.position, [1.0, 2.0, 3.0]);
        assert_eq!(toaster.transform.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(toaster.transform.scale, [1.0, 0.0, 0.0]);
        assert_eq!(toaster.mesh.as_ref().unwrap().triangle_count(), 2);
        // Non-object children are dropped.
        assert_eq!(toaster.children.len(), 1);
        assert_eq!(toaster.children[0].name, "Lever");
    }

    #[test]
    fn test_unnamed_objects_get_placeholder_name() {
        let file = write_scene(r#"{"objects": [{"transform": {}}]}"#);
        let (scene, _) = load_scene_export(file.path()).unwrap();
        assert_eq!(scene.objects[0].name, "UnnamedObject");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_scene_export(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(matches!(err, IngestError::SceneNotFound(_)));
    }

    #[test]
    fn test_missing_objects_key_is_fatal() {
        let file = write_scene(r#"{"groupName": "x"}"#);
        let err = load_scene_export(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::SceneMalformed(_)));
    }

    #[test]
    fn test_non_object_root_is_fatal() {
        let file = write_scene(r#"[1, 2, 3]"#);
        let err = load_scene_export(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::SceneMalformed(_)));
    }

    #[test]
    fn test_summarize_scene_truncates_after_five() {
        let objects = (0..7)
            .map(|i| SceneObject {
                name: format!("Obj{}", i),
                transform: Transform::default(),
                mesh: None,
                materials: vec![],
                children: vec![],
            })
            .collect();
        let scene = SceneExport {
            source: "scene.json".into(),
            group_name: String::new(),
            description: String::new(),
            objects,
        };
        let summary = summarize_scene(&scene);
        assert!(summary.contains("Exported objects: 7"));
        assert!(summary.contains("- Obj4"));
        assert!(!summary.contains("- Obj5"));
        assert!(summary.contains("...and 2 more"));
    }
}
