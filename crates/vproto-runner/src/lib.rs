//! Spec generation runner.
//!
//! Ties the ingestion, batching, and encoding stages together and
//! drives the opaque downstream generation pipeline one batch at a
//! time. Batches are strictly serialized: batch N's pipeline call is
//! awaited to completion before batch N+1 begins, bounding peak memory
//! to one batch's images.

pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod run;
pub mod task;

pub use batch::chunk_objects;
pub use config::RunnerConfig;
pub use error::{RunnerError, RunnerResult};
pub use output::{output_dirs, resolve_output_root, safe_dir_name};
pub use pipeline::{AgentServiceClient, SpecPipeline, SpecRunOutput};
pub use run::{run_generation, RunRequest, RunSummary};
