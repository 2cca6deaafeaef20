//! Image upload and request payload encoding.
//!
//! Provides the narrow [`ImageStore`] capability (upload bytes, get an
//! identifier back), its OpenAI Files API implementation, and the
//! payload encoder that turns collected images into request content
//! items with a per-image inline-encoding fallback.

pub mod client;
pub mod encode;
pub mod error;

pub use client::{FileStoreClient, ImageStore, StoreConfig};
pub use encode::{build_content_items, data_url};
pub use error::{UploadError, UploadResult};
