//! Shared data models for the vproto pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - The canonical camera-view taxonomy
//! - Views-manifest and scene-export documents
//! - Per-object image selections and payloads
//! - Request content items sent to the generation pipeline

pub mod content;
pub mod manifest;
pub mod scene;
pub mod selection;
pub mod view;

// Re-export common types
pub use content::{ImageSource, InputItem, RequestMessage};
pub use manifest::{ManifestObject, ViewEntry, ViewsManifest};
pub use scene::{MeshData, SceneExport, SceneObject, Transform};
pub use selection::{ImagePayload, ObjectImageSelection};
pub use view::CanonicalView;
