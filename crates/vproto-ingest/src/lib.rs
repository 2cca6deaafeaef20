//! Ingestion and reconciliation for vproto.
//!
//! Loads the scene export and views manifest, classifies and orders
//! rendered views, collects loadable images per object, and reconciles
//! manifest objects against caller-requested names. Everything here is
//! deterministic: canonical view order drives all output ordering, and
//! per-view problems surface as enumerable lists, not errors.

pub mod collect;
pub mod error;
pub mod manifest;
pub mod reconcile;
pub mod scene;
pub mod views;

pub use collect::collect_object_images;
pub use error::{IngestError, IngestResult};
pub use manifest::load_views_manifest;
pub use reconcile::select_manifest_objects;
pub use scene::{load_scene_export, summarize_scene};
pub use views::{is_rgb_view_file, select_ordered_views, OrderedViews};
