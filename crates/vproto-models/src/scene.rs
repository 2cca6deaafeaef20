//! Normalized scene-export types.
//!
//! The exporter writes a lenient JSON shape (vectors as lists or
//! `{x,y,z,w}` maps, optional meshes, nested children). The loader in
//! `vproto-ingest` normalizes it into these fixed-shape types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// World transform of an exported object (already world-space).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    /// Rotations may carry a `w` component; always stored as 4 values.
    pub rotation: [f64; 4],
    pub scale: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 4],
            scale: [0.0; 3],
        }
    }
}

/// Mesh geometry. Triangles index into vertices; normals/uvs may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<Value>,
    pub triangles: Vec<Value>,
    pub uvs: Vec<Value>,
    pub normals: Vec<Value>,
}

impl MeshData {
    /// Triangle count (three indices per triangle).
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

/// One exported scene object after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshData>,
    pub materials: Vec<Value>,
    pub children: Vec<SceneObject>,
}

/// The normalized scene export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneExport {
    /// Path the export was loaded from.
    pub source: String,
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub description: String,
    pub objects: Vec<SceneObject>,
}
