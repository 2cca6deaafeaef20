//! The downstream generation pipeline boundary.
//!
//! The runner treats spec generation as an opaque, blocking call:
//! request messages in, either a structured result or a failure out.
//! The concrete implementation posts to an external agent service and
//! writes the returned artifacts under the batch output directory.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use vproto_models::RequestMessage;

use crate::error::{RunnerError, RunnerResult};
use crate::output::safe_dir_name;

/// Result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecRunOutput {
    /// Artifact filenames written under the output directory.
    pub files: Vec<String>,
}

/// Opaque spec-generation pipeline.
///
/// `Ok(None)` signals the pipeline produced no output; the runner
/// treats that as fatal for the run, same as an `Err`.
#[async_trait]
pub trait SpecPipeline: Send + Sync {
    async fn run(
        &self,
        messages: &[RequestMessage],
        output_dir: &Path,
    ) -> RunnerResult<Option<SpecRunOutput>>;
}

/// Pipeline client backed by the agent service HTTP endpoint.
#[derive(Clone)]
pub struct AgentServiceClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct AgentRequest<'a> {
    input: &'a [RequestMessage],
}

#[derive(Debug, Deserialize)]
struct AgentResponse {
    /// Artifact name -> artifact JSON. BTreeMap keeps write order stable.
    files: BTreeMap<String, Value>,
}

impl AgentServiceClient {
    /// Create a new client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> RunnerResult<Self> {
        let endpoint = std::env::var("VPROTO_AGENT_URL")
            .map_err(|_| RunnerError::config_error("VPROTO_AGENT_URL not set"))?;
        Ok(Self::new(endpoint))
    }
}

#[async_trait]
impl SpecPipeline for AgentServiceClient {
    async fn run(
        &self,
        messages: &[RequestMessage],
        output_dir: &Path,
    ) -> RunnerResult<Option<SpecRunOutput>> {
        debug!("Submitting {} message(s) to {}", messages.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AgentRequest { input: messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RunnerError::pipeline_failed(format!(
                "agent service returned {status}: {message}"
            )));
        }

        let body: Value = response.json().await?;
        if body.is_null() {
            return Ok(None);
        }
        let parsed: AgentResponse = serde_json::from_value(body)?;

        tokio::fs::create_dir_all(output_dir).await?;
        let mut files = Vec::with_capacity(parsed.files.len());
        for (name, artifact) in &parsed.files {
            let file_name = safe_dir_name(name);
            let path = output_dir.join(&file_name);
            let text = serde_json::to_string_pretty(artifact)?;
            tokio::fs::write(&path, text).await?;
            info!("Wrote {}", path.display());
            files.push(file_name);
        }

        Ok(Some(SpecRunOutput { files }))
    }
}
